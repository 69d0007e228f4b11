use ndarray::Array2;
use serde_json::Value;

/// Line-plot dataset: one row per sample, first column is the X value.
///
/// Built from a 2-D array or from nested sequences. Values are kept as JSON so
/// integer data stays integral on the wire; NaN becomes `null`, which dygraphs
/// draws as a gap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotData {
    rows: Vec<Vec<Value>>,
}

impl PlotData {
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Array(self.rows.into_iter().map(Value::Array).collect())
    }
}

impl<T: Into<Value> + Clone> From<Array2<T>> for PlotData {
    fn from(array: Array2<T>) -> Self {
        Self::from_rows(array.rows().into_iter().map(|row| row.to_vec()))
    }
}

impl<T: Into<Value>> From<Vec<Vec<T>>> for PlotData {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}
