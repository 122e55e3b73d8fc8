// Cosine similarity between two dense vectors.
//
//   cos(a, b) = (a · b) / (|a| * |b|)
//
// Norms are always recomputed, even though vectorizer rows are already unit
// length. Each vector is first divided by its largest absolute entry so the
// squared terms neither overflow nor underflow for very large or very small
// magnitudes. A zero vector has no direction, so its similarity to anything
// is 0.0 rather than NaN.

/// Cosine similarity clamped to [0.0, 1.0].
///
/// Returns 0.0 when either vector has zero magnitude or the lengths differ.
/// Callers that need to reject mismatched lengths should check before calling.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let x = x / scale_a;
        let y = y / scale_b;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let score = dot / (norm_a.sqrt() * norm_b.sqrt());
    if score.is_finite() {
        // Negative only for vectors with negative entries, which TF-IDF never produces
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |max, x| max.max(x.abs()))
}
