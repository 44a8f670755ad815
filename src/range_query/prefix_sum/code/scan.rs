/// Prefix sum table as a running `scan`, collected in one pass.
pub fn build_prefix_sum_scan(data: &[i64]) -> Vec<i64> {
    std::iter::once(0)
        .chain(data.iter().scan(0i64, |acc, &v| {
            *acc += v;
            Some(*acc)
        }))
        .collect()
}
