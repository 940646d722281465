use crate::host::{ ColorSchemeHost, Subscription };
use crate::utils::ThemeState;

/// Keeps a theme in step with the host color scheme for as long as it lives.
#[derive(Debug)]
pub struct ThemeController {
    subscription: Option<Subscription>,
}

impl ThemeController {
    /// Theme the page should start with.
    pub fn initial<H: ColorSchemeHost + ?Sized>(host: &H) -> ThemeState {
        ThemeState::from_preference(host.prefers_dark())
    }

    /// Forwards every host notification to `apply`. Nothing is called until
    /// the host reports a change.
    pub fn attach<H, F>(host: &H, mut apply: F) -> Self
        where H: ColorSchemeHost + ?Sized, F: FnMut(ThemeState) + 'static
    {
        let subscription = host.subscribe(
            Box::new(move |is_dark| {
                log::debug!("System color scheme changed, dark = {}", is_dark);
                apply(ThemeState::from_preference(is_dark));
            })
        );
        Self { subscription: Some(subscription) }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.as_ref().map(Subscription::is_active).unwrap_or(false)
    }

    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}
