use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{CalendarError, CalendarResult};

/// String key-value storage with the shape of browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> CalendarResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> CalendarResult<()>;
    fn remove_item(&mut self, key: &str) -> CalendarResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> CalendarResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalendarResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> CalendarResult<()> {
        (**self).remove_item(key)
    }
}

/// In-process store; contents live as long as the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> CalendarResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalendarResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> CalendarResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// One file per key under a root directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> CalendarResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(CalendarError::storage(format!(
                "key '{key}' is not a valid file name"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> CalendarResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CalendarError::storage(format!(
                "read '{}': {e}",
                path.display()
            ))),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalendarResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("create store dir '{}'", self.root.display()))?;
        std::fs::write(&path, value).with_context(|| format!("write '{}'", path.display()))?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> CalendarResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CalendarError::storage(format!(
                "remove '{}': {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/store.rs"]
mod tests;
