/// produces `points` evenly spaced values from `start` to `end`,
/// both ends included:
///
/// at(i) = start + (end - start) * i / (points - 1)
///
/// a single point yields `start`, zero points yield nothing.
#[derive(Clone, Debug)]
pub struct Linspace {
    current: u64,
    current_back: u64,
    points: u64,
    start: f64,
    end: f64,
}

impl Linspace {
    pub fn new(start: f64, end: f64, points: u64) -> Self {
        Linspace {
            current: 0,
            current_back: points,
            points,
            start,
            end,
        }
    }

    /// one point every `spacing` units between start and end,
    /// the count being the truncated quotient
    pub fn with_spacing(start: f64, end: f64, spacing: f64) -> Self {
        let points = if spacing > 0. && end > start {
            ((end - start) / spacing) as u64
        } else {
            0
        };
        Self::new(start, end, points)
    }

    pub fn length(&self) -> u64 {
        self.current_back - self.current
    }

    fn at(&self, pos: u64) -> f64 {
        if self.points < 2 {
            return self.start;
        }
        let f_pos = pos as f64 / (self.points - 1) as f64;
        self.start + (self.end - self.start) * f_pos
    }

    /// panics (in debug) when len doesn't fit in usize
    fn usize_len(&self) -> usize {
        let l = self.length();
        debug_assert!(l <= usize::MAX as u64);
        l as usize
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.current_back {
            return None;
        }
        let result = self.at(self.current);
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = self.usize_len();
        (l, Some(l))
    }

    fn count(self) -> usize {
        self.usize_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_both_ends() {
        let v: Vec<f64> = Linspace::new(100., 500., 5).collect();
        assert_eq!(v, vec![100., 200., 300., 400., 500.]);
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(Linspace::new(3., 9., 1).collect::<Vec<_>>(), vec![3.]);
        assert_eq!(Linspace::new(3., 9., 0).count(), 0);
    }

    #[test]
    fn spacing_truncates() {
        // (1990 - 10) / 50 = 39.6
        let l = Linspace::with_spacing(10., 1990., 50.);
        assert_eq!(l.clone().count(), 39);
        let v: Vec<f64> = l.collect();
        assert_eq!(v[0], 10.);
        assert_eq!(*v.last().unwrap(), 1990.);
        assert_eq!(Linspace::with_spacing(10., 40., 50.).count(), 0);
        assert_eq!(Linspace::with_spacing(40., 10., 50.).count(), 0);
    }
}
