use contracts::shared::analytics::HistogramBin;

/// Equal-width histogram over `[min, max]` with at most `max_bins` bins.
///
/// The last bin is closed on the right so the maximum is counted. A series
/// with a single distinct value yields one zero-width bin.
pub fn histogram(values: &[f64], max_bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || max_bins == 0 {
        return vec![];
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: finite.len(),
        }];
    }

    let width = (max - min) / max_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..max_bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == max_bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for v in finite {
        let index = (((v - min) / width).floor() as usize).min(max_bins - 1);
        bins[index].count += 1;
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_every_value() {
        let values = [0.0, 1.0, 2.5, 5.0, 9.9, 10.0];
        let bins = histogram(&values, 5);

        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[4].end, 10.0);
        // 9.9 and the maximum share the last, right-closed bin
        assert_eq!(bins[4].count, 2);
    }

    #[test]
    fn test_histogram_degenerate_inputs() {
        assert!(histogram(&[], 30).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());

        let bins = histogram(&[4.0, 4.0, 4.0], 30);
        assert_eq!(
            bins,
            vec![HistogramBin {
                start: 4.0,
                end: 4.0,
                count: 3
            }]
        );
    }
}
