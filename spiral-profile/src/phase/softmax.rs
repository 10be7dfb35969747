/// Temperature-scaled softmax: `p_i = exp(x_i / T) / Σ_j exp(x_j / T)`.
///
/// Shifted by the maximum before exponentiating; the shift cancels in the
/// ratio and keeps `exp` finite for large logits.
pub fn softmax(logits: &[f64], temperature: f64) -> Vec<f64> {
    if logits.is_empty() {
        return Vec::new();
    }
    let scaled: Vec<f64> = logits.iter().map(|x| x / temperature).collect();
    let max = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scaled.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|v| v / sum).collect()
}
