use serde::{Deserialize, Serialize};

/// A station's reported time series: parallel `labels` and `values`,
/// paired by index.
///
/// Labels are usually timestamps but are neither guaranteed sorted nor
/// complete. The API has used both `{labels, data}` and
/// `{timestamps, values}` for this payload; either deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseSeries {
    #[serde(alias = "timestamps", default)]
    pub labels: Vec<String>,
    #[serde(alias = "data", default)]
    pub values: Vec<Option<f64>>,
}

impl SparseSeries {
    pub fn new(labels: Vec<String>, values: Vec<Option<f64>>) -> Self {
        Self { labels, values }
    }

    /// Index-paired (label, value) entries. When the two sequences differ in
    /// length the unpaired tail is ignored.
    pub fn points(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.labels.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<L: Into<String>> FromIterator<(L, Option<f64>)> for SparseSeries {
    fn from_iter<T: IntoIterator<Item = (L, Option<f64>)>>(iter: T) -> Self {
        let (labels, values) = iter
            .into_iter()
            .map(|(label, value)| (label.into(), value))
            .unzip();
        SparseSeries { labels, values }
    }
}

#[cfg(test)]
mod tests {
    use super::SparseSeries;

    #[test]
    fn test_deserialize_labels_data() {
        let body = r#"{"labels": ["2025-08-01", "2025-08-02"], "data": [71.5, null]}"#;
        let series: SparseSeries = serde_json::from_str(body).unwrap();
        assert_eq!(series.labels, vec!["2025-08-01", "2025-08-02"]);
        assert_eq!(series.values, vec![Some(71.5), None]);
    }

    #[test]
    fn test_deserialize_timestamps_values() {
        let body = r#"{"timestamps": ["t1"], "values": [4]}"#;
        let series: SparseSeries = serde_json::from_str(body).unwrap();
        assert_eq!(series.labels, vec!["t1"]);
        assert_eq!(series.values, vec![Some(4.0)]);
    }

    #[test]
    fn test_missing_arrays_default_empty() {
        let series: SparseSeries = serde_json::from_str("{}").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_points_ignore_unpaired_tail() {
        let series = SparseSeries::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![Some(1.0), Some(2.0)],
        );
        let points: Vec<_> = series.points().collect();
        assert_eq!(points, vec![("a", Some(1.0)), ("b", Some(2.0))]);
        assert_eq!(series.len(), 2);
    }
}
