pub(crate) struct Linspace {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub(crate) fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            let num_steps = (n - 1) as f64;
            (max - min) / num_steps
        } else {
            0.
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

#[test]
fn test_linspace() {
    let points: Vec<_> = Linspace::new(0., 30., 31).collect();

    assert_eq!(points.len(), 31);
    assert_eq!(points[0], 0.);
    assert_eq!(points[1], 1.);
    assert_eq!(points[30], 30.);

    let points: Vec<_> = Linspace::new(15., 40., 500).collect();

    assert_eq!(points.len(), 500);
    assert_eq!(points[0], 15.);
    assert_eq!(points[499], 15. + (40. - 15.) / 499. * 499.);
}
