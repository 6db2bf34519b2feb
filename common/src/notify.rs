use std::time::Duration;

/// Kind of a transient status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// How long the banner stays up before it is dismissed.
    pub fn dismiss_after(self) -> Duration {
        match self {
            BannerKind::Success => Duration::from_secs(5),
            BannerKind::Error => Duration::from_secs(8),
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "banner banner-success",
            BannerKind::Error => "banner banner-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_longer_than_successes() {
        assert_eq!(BannerKind::Success.dismiss_after(), Duration::from_secs(5));
        assert_eq!(BannerKind::Error.dismiss_after(), Duration::from_secs(8));
    }
}
