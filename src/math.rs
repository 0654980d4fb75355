use num::Float;

/// Elementwise minimum of two same-length sequences.
pub(crate) fn zip_min<F: Float>(
    u: impl IntoIterator<Item = F>,
    v: impl IntoIterator<Item = F>,
) -> impl Iterator<Item = F> {
    u.into_iter().zip(v).map(|(u, v)| F::min(u, v))
}

/// Elementwise maximum of two same-length sequences.
pub(crate) fn zip_max<F: Float>(
    u: impl IntoIterator<Item = F>,
    v: impl IntoIterator<Item = F>,
) -> impl Iterator<Item = F> {
    u.into_iter().zip(v).map(|(u, v)| F::max(u, v))
}

/// Center of mass `sum(x * mu) / sum(mu)` of a membership curve over its
/// universe. `None` when the curve has zero mass; the division is
/// undefined there and must not silently produce NaN.
pub(crate) fn centroid<F: Float>(
    xs: impl IntoIterator<Item = F>,
    degrees: impl IntoIterator<Item = F>,
) -> Option<F> {
    let (num, den) = xs
        .into_iter()
        .zip(degrees)
        .fold((F::zero(), F::zero()), |(num, den), (x, mu)| {
            (num + x * mu, den + mu)
        });

    if den == F::zero() {
        None
    } else {
        Some(num / den)
    }
}

#[test]
fn test_zip_ops() {
    let u = [0.2, 0.8, 0.5];
    let v = [0.6, 0.1, 0.5];

    assert_eq!(zip_min(u, v).collect::<Vec<_>>(), vec![0.2, 0.1, 0.5]);
    assert_eq!(zip_max(u, v).collect::<Vec<_>>(), vec![0.6, 0.8, 0.5]);
}

#[test]
fn test_centroid() {
    // Symmetric hump centers on its peak
    let xs = [0., 1., 2., 3., 4.];
    let mu = [0., 0.5, 1., 0.5, 0.];

    assert_eq!(centroid(xs, mu), Some(2.));

    // Uniform mass centers on the midpoint
    let mu = [1., 1., 1., 1., 1.];

    assert_eq!(centroid(xs, mu), Some(2.));

    // Zero mass has no centroid
    let mu = [0., 0., 0., 0., 0.];

    assert_eq!(centroid(xs, mu), None);
}
