use super::entry_type::EntryType;
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

/// Per-type counts over a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub clock_in_count: usize,
    pub clock_out_count: usize,
}

impl Summary {
    pub fn tally(&mut self, kind: EntryType) {
        self.total += 1;
        match kind {
            EntryType::ClockIn => self.clock_in_count += 1,
            EntryType::ClockOut => self.clock_out_count += 1,
        }
    }
}

impl Add for Summary {
    type Output = Summary;

    fn add(self, rhs: Summary) -> Summary {
        Summary {
            total: self.total + rhs.total,
            clock_in_count: self.clock_in_count + rhs.clock_in_count,
            clock_out_count: self.clock_out_count + rhs.clock_out_count,
        }
    }
}

impl Sum for Summary {
    fn sum<I: Iterator<Item = Summary>>(iter: I) -> Summary {
        iter.fold(Summary::default(), Add::add)
    }
}
