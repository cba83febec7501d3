use crate::{
    config::settings::CalendarConfig,
    controller::{
        feedback::LockedFeedback,
        input::{CalendarEvent, Key},
        route::Route,
        timers::{TimerQueue, TimerToken},
    },
    foundation::core::{DayNumber, Millis, Viewport},
    foundation::error::CalendarResult,
    foundation::rng::LayoutRng,
    layout::{cache::LayoutCache, generator, model::Layout, store::KeyValueStore},
    unlock::{clock::Clock, policy::UnlockPolicy},
    zoom::transform::ZoomTransform,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scheduled {
    ZoomIn(DayNumber),
    StopShake,
    FadeMessage,
    HideMessage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingZoom {
    token: TimerToken,
    day: DayNumber,
    reason: ZoomReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ZoomReason {
    /// First mount on `/day/:day`; the route already names the door.
    DeepLink,
    /// Moving between doors.
    Navigation,
}

/// Owns the calendar state machine: active door, layout, zoom and locked-door feedback.
///
/// The controller is authoritative. The route is derived from [`Self::active_day`]; every
/// entry point returns the route the host should *replace* into its history when it changed.
/// Delayed transitions are driven by [`Self::advance`] with host time.
pub struct CalendarController<S> {
    config: CalendarConfig,
    policy: UnlockPolicy,
    clock: Box<dyn Clock>,
    rng: LayoutRng,
    cache: LayoutCache<S>,
    viewport: Viewport,
    layout: Layout,
    active_day: Option<DayNumber>,
    zoom: ZoomTransform,
    feedback: LockedFeedback,
    timers: TimerQueue<Scheduled>,
    pending_zoom: Option<PendingZoom>,
    shake_timer: Option<TimerToken>,
    fade_timer: Option<TimerToken>,
    hide_timer: Option<TimerToken>,
    route: Route,
}

impl<S: KeyValueStore> CalendarController<S> {
    /// Build a controller for `viewport`, reusing the stored layout when it was computed for
    /// exactly this viewport and generating (and storing) a fresh one otherwise.
    pub fn new(
        config: CalendarConfig,
        store: S,
        clock: Box<dyn Clock>,
        mut rng: LayoutRng,
        viewport: Viewport,
    ) -> CalendarResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(viewport.width, viewport.height)?;
        let mut cache = LayoutCache::with_key(store, config.layout_storage_key.clone());

        let layout = match cache.load_for(viewport) {
            Some(layout) => {
                tracing::debug!(?viewport, "reusing cached layout");
                layout
            }
            None => {
                let layout = generator::generate(viewport, &mut rng)?;
                if let Err(e) = cache.save(&layout) {
                    tracing::warn!(error = %e, "failed to persist fresh layout");
                }
                layout
            }
        };

        Ok(Self {
            policy: UnlockPolicy::from_config(&config),
            config,
            clock,
            rng,
            cache,
            viewport,
            layout,
            active_day: None,
            zoom: ZoomTransform::IDENTITY,
            feedback: LockedFeedback::default(),
            timers: TimerQueue::new(),
            pending_zoom: None,
            shake_timer: None,
            fade_timer: None,
            hide_timer: None,
            route: Route::Home,
        })
    }

    pub fn active_day(&self) -> Option<DayNumber> {
        self.active_day
    }

    pub fn zoom(&self) -> ZoomTransform {
        self.zoom
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn feedback(&self) -> &LockedFeedback {
        &self.feedback
    }

    /// Route currently mirrored into the host history.
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn policy(&self) -> &UnlockPolicy {
        &self.policy
    }

    pub fn cache(&self) -> &LayoutCache<S> {
        &self.cache
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.cache.store_mut()
    }

    pub fn can_open(&self, day: DayNumber) -> bool {
        self.policy.can_open(day, self.clock.as_ref())
    }

    pub fn opening_date_message(&self, day: DayNumber) -> String {
        self.policy.opening_date_message(day, self.clock.today())
    }

    /// Day a delayed zoom-in is heading for, if one is scheduled.
    pub fn pending_zoom_target(&self) -> Option<DayNumber> {
        self.pending_zoom.map(|p| p.day)
    }

    /// When the host should next call [`Self::advance`].
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_due()
    }

    /// Apply the route the app was loaded on.
    ///
    /// The calendar always starts zoomed out; a `/day/:day` link zooms in after the configured
    /// dwell so the whole calendar is seen first.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, route: Route, now: Millis) -> Option<Route> {
        self.zoom_out();
        self.route = route.clone();
        match route {
            Route::Day(day) => {
                let delay = self.config.timing.zoom_in_delay_ms;
                self.schedule_zoom_in(day, now, delay, ZoomReason::DeepLink);
            }
            Route::NotFound(path) => {
                tracing::warn!(%path, "unknown route, showing the calendar");
            }
            Route::Home | Route::Welcome => {}
        }
        self.sync_route()
    }

    pub fn handle(&mut self, event: CalendarEvent, now: Millis) -> Option<Route> {
        tracing::debug!(?event, active = ?self.active_day, "calendar event");
        match event {
            CalendarEvent::DoorClicked(day) => {
                if self.active_day.is_none() {
                    self.zoom_to(day);
                } else {
                    self.front_clicked(day, now);
                }
            }
            CalendarEvent::DoorFrontClicked(day) => self.front_clicked(day, now),
            CalendarEvent::DoorBackClicked(day) => {
                if self.layout.is_open(day) {
                    self.set_open(day, false);
                    self.zoom_out();
                }
            }
            CalendarEvent::BackgroundClicked | CalendarEvent::Wheel => {
                if self.active_day.is_some() {
                    self.zoom_out();
                }
            }
            CalendarEvent::Key(key) => self.key_pressed(key, now),
            CalendarEvent::Swipe {
                dx,
                dy,
                started_on_back,
            } => self.swiped(dx, dy, started_on_back),
            CalendarEvent::Resize(viewport) => self.resize(viewport),
            CalendarEvent::Navigate(route) => self.navigated(route),
        }
        self.sync_route()
    }

    /// Fire every delayed transition due at `now`.
    pub fn advance(&mut self, now: Millis) -> Option<Route> {
        for (token, action) in self.timers.take_due(now) {
            match action {
                Scheduled::ZoomIn(day) => {
                    if self.pending_zoom.is_some_and(|p| p.token == token) {
                        self.pending_zoom = None;
                        self.zoom_to(day);
                    }
                }
                Scheduled::StopShake => {
                    self.shake_timer = None;
                    self.feedback.stop_shaking();
                }
                Scheduled::FadeMessage => {
                    self.fade_timer = None;
                    self.feedback.begin_fade();
                }
                Scheduled::HideMessage => {
                    self.hide_timer = None;
                    self.feedback.hide_message();
                }
            }
        }
        self.sync_route()
    }

    fn front_clicked(&mut self, day: DayNumber, now: Millis) {
        if !self.can_open(day) {
            self.show_locked_feedback(day, now);
            return;
        }
        match self.active_day {
            Some(active) if active == day => {
                if self.set_open(day, true) {
                    tracing::debug!(%day, "door opened");
                }
            }
            Some(_) => self.navigate_to(day, now),
            None => self.zoom_to(day),
        }
    }

    fn key_pressed(&mut self, key: Key, now: Millis) {
        let Some(active) = self.active_day else {
            return;
        };
        if key.is_dismiss() {
            self.zoom_out();
            return;
        }
        let target = match key {
            Key::ArrowRight => active.offset(1),
            Key::ArrowLeft => active.offset(-1),
            Key::Digit(d) => DayNumber::new(d).ok(),
            _ => None,
        };
        if let Some(target) = target {
            self.navigate_to(target, now);
        }
    }

    fn swiped(&mut self, dx: f64, dy: f64, started_on_back: bool) {
        let Some(active) = self.active_day else {
            return;
        };
        if !self.layout.is_open(active) {
            return;
        }
        if dx.abs() <= self.config.swipe_threshold_px || dx.abs() <= dy.abs() {
            return;
        }
        if started_on_back && dx > 0.0 {
            self.set_open(active, false);
        }
        self.zoom_out();
    }

    fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        let layout = match generator::generate(viewport, &mut self.rng) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!(error = %e, ?viewport, "ignoring resize");
                return;
            }
        };
        tracing::debug!(from = ?self.viewport, to = ?viewport, "viewport changed, regenerating layout");
        self.viewport = viewport;
        self.layout = layout;
        self.persist();
        self.refocus();
    }

    fn navigated(&mut self, route: Route) {
        self.route = route.clone();
        match route {
            Route::Day(day) => {
                if self.active_day != Some(day) || self.pending_zoom.is_some() {
                    self.zoom_to(day);
                }
            }
            Route::Home | Route::Welcome => self.zoom_out(),
            Route::NotFound(path) => {
                tracing::warn!(%path, "unknown route, showing the calendar");
                self.zoom_out();
            }
        }
    }

    fn zoom_to(&mut self, day: DayNumber) {
        self.cancel_pending_zoom();
        self.active_day = Some(day);
        self.refocus();
        tracing::debug!(%day, scale = self.zoom.scale, "zoomed in");
    }

    fn zoom_out(&mut self) {
        self.cancel_pending_zoom();
        if self.active_day.take().is_some() {
            tracing::debug!("zoomed out");
        }
        self.zoom = ZoomTransform::IDENTITY;
    }

    /// Zoom out now and back in on `day` after the navigation delay.
    fn navigate_to(&mut self, day: DayNumber, now: Millis) {
        if self.active_day == Some(day) {
            return;
        }
        self.zoom_out();
        let delay = self.config.timing.navigation_delay_ms;
        self.schedule_zoom_in(day, now, delay, ZoomReason::Navigation);
    }

    fn schedule_zoom_in(&mut self, day: DayNumber, now: Millis, delay: u64, reason: ZoomReason) {
        self.cancel_pending_zoom();
        let token = self.timers.schedule(now, delay, Scheduled::ZoomIn(day));
        self.pending_zoom = Some(PendingZoom { token, day, reason });
    }

    fn cancel_pending_zoom(&mut self) {
        if let Some(pending) = self.pending_zoom.take() {
            self.timers.cancel(pending.token);
        }
    }

    fn refocus(&mut self) {
        self.zoom = match self.active_day.and_then(|d| self.layout.door(d)) {
            Some(door) => ZoomTransform::focus(door.position, self.viewport),
            None => ZoomTransform::IDENTITY,
        };
    }

    fn set_open(&mut self, day: DayNumber, open: bool) -> bool {
        let changed = self.layout.set_open(day, open);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&mut self) {
        if let Err(e) = self.cache.save(&self.layout) {
            tracing::warn!(error = %e, "failed to persist layout");
        }
    }

    fn show_locked_feedback(&mut self, day: DayNumber, now: Millis) {
        let message = self.opening_date_message(day);
        tracing::debug!(%day, %message, "locked door clicked");
        self.feedback.start(day, message);

        self.timers.cancel_slot(&mut self.shake_timer);
        self.timers.cancel_slot(&mut self.fade_timer);
        self.timers.cancel_slot(&mut self.hide_timer);

        let timing = self.config.timing;
        self.shake_timer = Some(self.timers.schedule(now, timing.shake_ms, Scheduled::StopShake));
        self.fade_timer = Some(
            self.timers
                .schedule(now, timing.message_ms, Scheduled::FadeMessage),
        );
        self.hide_timer = Some(self.timers.schedule(
            now,
            timing.message_ms + timing.message_fade_ms,
            Scheduled::HideMessage,
        ));
    }

    fn sync_route(&mut self) -> Option<Route> {
        if self.active_day.is_none() {
            let holding_deep_link = self
                .pending_zoom
                .is_some_and(|p| p.reason == ZoomReason::DeepLink);
            if holding_deep_link || self.route == Route::Welcome {
                return None;
            }
        }
        let derived = Route::from_active_day(self.active_day);
        if derived == self.route {
            return None;
        }
        self.route = derived.clone();
        Some(derived)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/calendar.rs"]
mod tests;
