#![doc = include_str!("../README.md")]

use std::fmt;

/// A compact set of days (1..=31) within a single calendar month, backed by a
/// `u32` bit array.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MonthDays(u32);

impl MonthDays {
    /// Create a new set that does not include any day.
    ///
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let days = MonthDays::new();
    /// assert!(days.is_empty());
    /// assert_eq!(days.count(), 0);
    /// ```
    pub const fn new() -> Self {
        Self(0)
    }

    /// Include a day in this set.
    ///
    /// # Panics
    ///
    /// Panics if `day` is not in `1..=31`.
    ///
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let mut days = MonthDays::new();
    /// days.insert(5);
    /// days.insert(5);
    /// days.insert(19);
    /// assert_eq!(days.count(), 2);
    /// ```
    pub fn insert(&mut self, day: u32) {
        assert!((1..=31).contains(&day));
        self.0 |= 1 << (day - 1)
    }

    /// Check if this set includes the given day.
    ///
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let days: day_bitmap::MonthDays = [12, 26].into_iter().collect();
    /// assert!(days.contains(12));
    /// assert!(days.contains(26));
    /// assert!(!days.contains(13));
    /// ```
    pub fn contains(self, day: u32) -> bool {
        assert!((1..=31).contains(&day));
        self.0 & (1 << (day - 1)) != 0
    }

    /// Check if this set includes no day at all.
    ///
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let mut days = MonthDays::new();
    /// assert!(days.is_empty());
    ///
    /// days.insert(31);
    /// assert!(!days.is_empty());
    /// ```
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the days of this set in ascending order.
    ///
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let days: MonthDays = [19, 5, 12].into_iter().collect();
    /// let sorted: Vec<u32> = days.iter().collect();
    /// assert_eq!(sorted, [5, 12, 19]);
    /// ```
    pub fn iter(self) -> impl Iterator<Item = u32> {
        let mut bits = self.0;

        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }

            let day0 = bits.trailing_zeros();
            bits ^= 1 << day0;
            Some(day0 + 1)
        })
    }

    /// Get the first day of this set, if it is not empty.
    ///
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let mut days = MonthDays::new();
    /// assert_eq!(days.first(), None);
    ///
    /// days.insert(26);
    /// assert_eq!(days.first(), Some(26));
    ///
    /// days.insert(12);
    /// assert_eq!(days.first(), Some(12));
    /// ```
    pub fn first(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() + 1)
        }
    }

    /// Get the first day of this set that strictly follows the input day, if
    /// such a day exists.
    ///
    /// # Panics
    ///
    /// Panics if `day` is not in `1..=31`.
    ///
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let days: MonthDays = [5, 19].into_iter().collect();
    /// assert_eq!(days.first_after(1), Some(5));
    /// assert_eq!(days.first_after(5), Some(19));
    /// assert_eq!(days.first_after(19), None);
    /// ```
    pub fn first_after(self, day: u32) -> Option<u32> {
        assert!((1..=31).contains(&day));
        let shifted = self.0 >> day;

        if shifted == 0 {
            None
        } else {
            Some(day + shifted.trailing_zeros() + 1)
        }
    }

    /// Count the days included in this set.
    ///
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let days: MonthDays = [2, 16, 30].into_iter().collect();
    /// assert_eq!(days.count(), 3);
    /// ```
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl FromIterator<u32> for MonthDays {
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let days: MonthDays = (1..=31).step_by(7).collect();
    /// assert_eq!(days.count(), 5);
    /// ```
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut days = Self::new();

        for day in iter {
            days.insert(day);
        }

        days
    }
}

impl fmt::Debug for MonthDays {
    /// ```
    /// use day_bitmap::MonthDays;
    ///
    /// let days: MonthDays = [26, 3].into_iter().collect();
    /// assert_eq!(format!("{days:?}"), "{03, 26}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugDay(u32);

        impl fmt::Debug for DebugDay {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:02}", self.0)
            }
        }

        f.debug_set().entries(self.iter().map(DebugDay)).finish()
    }
}
