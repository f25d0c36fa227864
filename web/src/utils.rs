use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Types persisted in localStorage under a fixed, versioned key.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_load() -> Option<Self>;

    fn local_or_default() -> Self
    where
        Self: Default,
    {
        Self::local_load().unwrap_or_default()
    }

    fn local_save(&self);
}

impl<T> LocalOrDefault for T
where
    T: StorageKey + Serialize + DeserializeOwned,
{
    fn local_load() -> Option<Self> {
        LocalStorage::get(Self::KEY).ok()
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(Self::KEY, self) {
            log::error!("failed to save {}: {:?}", Self::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Fixed-width value for the scoreboard counters.
pub(crate) fn format_for_counter(value: i32) -> String {
    format!("{:03}", value.clamp(-99, 999))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_three_digits_wide() {
        assert_eq!(format_for_counter(0), "000");
        assert_eq!(format_for_counter(7), "007");
        assert_eq!(format_for_counter(42), "042");
        assert_eq!(format_for_counter(999), "999");
    }

    #[test]
    fn counter_clamps_out_of_range_values() {
        assert_eq!(format_for_counter(1234), "999");
        assert_eq!(format_for_counter(-500), "-99");
    }
}
