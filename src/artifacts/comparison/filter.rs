use bitflags::bitflags;

bitflags! {
    /// Which report buckets a presentation should show.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ReportFilter: u32 {
        const ONLY_IN_FIRST = 0b0001;
        const ONLY_IN_SECOND = 0b0010;
        const DIFFERENT = 0b0100;
        const IDENTICAL = 0b1000;
    }
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl ReportFilter {
    /// Parses a set of bucket letters: `1`, `2`, `D` and `I`.
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c {
                '1' => filter |= Self::ONLY_IN_FIRST,
                '2' => filter |= Self::ONLY_IN_SECOND,
                'D' | 'd' => filter |= Self::DIFFERENT,
                'I' | 'i' => filter |= Self::IDENTICAL,
                _ => return None,
            }
        }

        Some(filter)
    }
}
