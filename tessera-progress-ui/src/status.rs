//! Status classification for deriving ring colors from a progress value.
//!
//! ## Usage
//!
//! Implement [`ProgressStatus`] on an enum ordered from best to worst, then
//! attach it to a ring with
//! [`ProgressRingArgs::status_type`](crate::progress_ring::ProgressRingArgs::status_type).

use std::{fmt, sync::Arc};

use tessera_ui::Color;

/// Colors resolved from a status classification for one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusColors {
    /// Progress arc color.
    pub color: Color,
    /// Optional inner arc color override.
    pub inner_color: Option<Color>,
}

/// A set of equally sized progress buckets, each mapped to a color.
///
/// Variants must be ordered from best (low progress) to worst (high
/// progress). The unit range is split into one bucket per variant.
pub trait ProgressStatus: Copy + Send + Sync + 'static {
    /// All variants, ordered from best to worst. Must be non-empty;
    /// [`classify`](Self::classify) has no status to return otherwise.
    const ALL: &'static [Self];

    /// Progress arc color for this status.
    fn color(&self) -> Color;

    /// Inner arc color for this status, if it should differ from the
    /// configured one.
    fn inner_color(&self) -> Option<Color> {
        None
    }

    /// Classifies a progress value into a status.
    ///
    /// # Panics
    ///
    /// Panics if [`ALL`](Self::ALL) is empty.
    fn classify(progress: f32) -> Self {
        debug_assert!(!Self::ALL.is_empty(), "ProgressStatus::ALL must be non-empty");
        Self::ALL[bucket_index(progress, Self::ALL.len())]
    }
}

/// Maps a progress value onto a bucket index in `0..variant_count`.
///
/// Each bucket covers a closed range of width `1 / variant_count`, checked in
/// ascending order, so a value sitting exactly on a shared boundary resolves
/// to the lower bucket. Values outside the unit range, including negative
/// ones, fall through to the last bucket.
pub fn bucket_index(progress: f32, variant_count: usize) -> usize {
    if variant_count == 0 {
        return 0;
    }
    let width = 1.0 / variant_count as f32;
    for index in 0..variant_count - 1 {
        let lower = index as f32 * width;
        let upper = (index + 1) as f32 * width;
        if (lower..=upper).contains(&progress) {
            return index;
        }
    }
    variant_count - 1
}

type StatusResolver = dyn Fn(f32) -> StatusColors + Send + Sync;

/// Type-erased handle to a [`ProgressStatus`] implementation.
///
/// Cloned handles compare equal; independently constructed handles do not,
/// even for the same status type.
#[derive(Clone)]
pub struct StatusSource {
    resolve: Arc<StatusResolver>,
}

impl StatusSource {
    /// Creates a source backed by the given status type.
    pub fn of<S: ProgressStatus>() -> Self {
        Self {
            resolve: Arc::new(|progress| {
                let status = S::classify(progress);
                StatusColors {
                    color: status.color(),
                    inner_color: status.inner_color(),
                }
            }),
        }
    }

    /// Resolves the colors for a progress value.
    pub fn resolve(&self, progress: f32) -> StatusColors {
        (self.resolve)(progress)
    }
}

impl PartialEq for StatusSource {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.resolve, &other.resolve)
    }
}

impl fmt::Debug for StatusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Severity {
        Fine,
        Degraded,
        Down,
    }

    impl ProgressStatus for Severity {
        const ALL: &'static [Self] = &[Self::Fine, Self::Degraded, Self::Down];

        fn color(&self) -> Color {
            match self {
                Self::Fine => Color::GREEN,
                Self::Degraded => Color::new(1.0, 1.0, 0.0, 1.0),
                Self::Down => Color::RED,
            }
        }

        fn inner_color(&self) -> Option<Color> {
            matches!(self, Self::Down).then_some(Color::RED.with_alpha(0.3))
        }
    }

    #[test]
    fn test_boundary_value_resolves_to_lower_bucket() {
        // With six buckets, 1/6 sits on the boundary between the first two
        // and stays in the first.
        assert_eq!(bucket_index(1.0 / 6.0, 6), 0);
        assert_eq!(bucket_index(2.0 / 6.0, 6), 1);
    }

    #[test]
    fn test_extremes_map_to_first_and_last_bucket() {
        assert_eq!(bucket_index(0.0, 6), 0);
        assert_eq!(bucket_index(1.0, 6), 5);
    }

    #[test]
    fn test_out_of_range_values_fall_to_worst_bucket() {
        assert_eq!(bucket_index(1.5, 6), 5);
        assert_eq!(bucket_index(-0.2, 6), 5);
        assert_eq!(bucket_index(f32::NAN, 6), 5);
    }

    #[test]
    fn test_midpoint_lands_in_middle_bucket() {
        assert_eq!(bucket_index(0.5, 6), 2);
    }

    #[test]
    fn test_single_bucket_catches_everything() {
        assert_eq!(bucket_index(0.0, 1), 0);
        assert_eq!(bucket_index(0.7, 1), 0);
        assert_eq!(bucket_index(9.0, 1), 0);
    }

    #[test]
    fn test_classify_uses_declared_order() {
        assert_eq!(Severity::classify(0.1), Severity::Fine);
        assert_eq!(Severity::classify(0.5), Severity::Degraded);
        assert_eq!(Severity::classify(0.9), Severity::Down);
    }

    #[test]
    fn test_source_resolves_colors_and_inner_override() {
        let source = StatusSource::of::<Severity>();
        let resolved = source.resolve(0.1);
        assert_eq!(resolved.color, Color::GREEN);
        assert!(resolved.inner_color.is_none());

        let resolved = source.resolve(0.95);
        assert_eq!(resolved.color, Color::RED);
        assert!(resolved.inner_color.is_some());
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_classify_rejects_empty_variant_list() {
        #[derive(Clone, Copy, PartialEq, Debug)]
        enum Hollow {}

        impl ProgressStatus for Hollow {
            const ALL: &'static [Self] = &[];

            fn color(&self) -> Color {
                match *self {}
            }
        }

        let _ = Hollow::classify(0.5);
    }

    #[test]
    fn test_source_equality_is_by_handle() {
        let source = StatusSource::of::<Severity>();
        assert_eq!(source.clone(), source);
        assert_ne!(StatusSource::of::<Severity>(), source);
    }
}
