use std::borrow::Borrow;
use std::convert::Infallible;
use std::time::Duration;

pub fn log_error_ccstr<E: core::fmt::Display>(error: E) -> CCStr {
    let e = error.to_string();
    log::error!("{e}");
    CCStr::from(e)
}

/// Converts a number of seconds into a [Duration].
///
/// Fractional seconds are kept. Negative and NaN values give [Duration::ZERO],
/// values too big to be represented saturate to [Duration::MAX].
pub fn seconds_to_duration(seconds: f64) -> Duration {
    if !(seconds > 0.0) {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

/// Suspends the current task for `seconds` seconds
pub async fn sleep_secs(seconds: f64) {
    tokio::time::sleep(seconds_to_duration(seconds)).await
}

pub fn timestamp_to_string(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.to_string())
        .unwrap_or_else(|| format!("invalid timestamp {ts}"))
}

// pub type CheapClone<T> = std::sync::Arc<T>;
pub type CheapClone<T> = std::rc::Rc<T>;

/// A [CheapClone] compared by pointer identity
#[derive(Debug)]
pub struct EqCheapClone<T: ?Sized>(CheapClone<T>);
impl<T: ?Sized> Clone for EqCheapClone<T> {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}
impl<T: ?Sized> PartialEq for EqCheapClone<T> {
    fn eq(&self, other: &Self) -> bool {
        CheapClone::ptr_eq(&self.0, &other.0)
    }
}
impl<T: ?Sized> From<CheapClone<T>> for EqCheapClone<T> {
    fn from(value: CheapClone<T>) -> Self {
        EqCheapClone(value)
    }
}
impl<T: ?Sized> core::ops::Deref for EqCheapClone<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CCStr(CheapClone<str>);
impl Clone for CCStr {
    fn clone(&self) -> Self {
        Self(CheapClone::clone(&self.0))
    }
}

impl core::str::FromStr for CCStr {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CCStr(CheapClone::from(s)))
    }
}
impl From<String> for CCStr {
    fn from(value: String) -> Self {
        CCStr(CheapClone::from(value))
    }
}
impl From<&String> for CCStr {
    fn from(value: &String) -> Self {
        CCStr(CheapClone::from(value.as_str()))
    }
}
impl From<&str> for CCStr {
    fn from(value: &str) -> Self {
        CCStr(CheapClone::from(value))
    }
}
impl core::ops::Deref for CCStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
impl AsRef<str> for CCStr {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl core::fmt::Display for CCStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for CCStr {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_keep_their_fraction() {
        assert_eq!(seconds_to_duration(1.5), Duration::from_millis(1500));
        assert_eq!(seconds_to_duration(0.25), Duration::from_millis(250));
    }

    #[test]
    fn invalid_seconds_do_not_sleep() {
        assert_eq!(seconds_to_duration(-1.0), Duration::ZERO);
        assert_eq!(seconds_to_duration(f64::NAN), Duration::ZERO);
        assert_eq!(seconds_to_duration(0.0), Duration::ZERO);
        assert_eq!(seconds_to_duration(f64::INFINITY), Duration::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn sleep_secs_waits_the_whole_duration() {
        let start = tokio::time::Instant::now();
        sleep_secs(1.5).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn ccstr_clones_share_the_buffer() {
        let a = CCStr::from("failed to load");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(&*b, "failed to load");
        assert_eq!(log_error_ccstr("boom"), CCStr::from("boom"));
        assert_eq!(log_error_ccstr(42), CCStr::from("42"));
    }

    #[test]
    fn eq_cheap_clone_compares_pointers() {
        let a = EqCheapClone::from(CheapClone::new(1));
        let b = EqCheapClone::from(CheapClone::new(1));
        assert!(a == a.clone());
        assert!(a != b);
        assert_eq!(*a, 1);
    }
}
