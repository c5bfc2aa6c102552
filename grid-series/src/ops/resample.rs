use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::domain::{Column, Frame};

/// Calendar-period means of a set of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Resampled {
    /// Last day of each period.
    pub labels: Vec<NaiveDate>,
    pub columns: Vec<Column>,
}

impl Resampled {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Keep only the periods for which `keep` holds.
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let positions: Vec<usize> = (0..self.len()).filter(|&p| keep(p)).collect();
        self.labels = positions.iter().map(|&p| self.labels[p]).collect();
        self.columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name(), positions.iter().map(|&p| c.values()[p]).collect()))
            .collect();
    }
}

#[derive(Clone, Copy, Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.sum += v;
            self.count += 1;
        }
    }

    fn get(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

fn group_means<K: Ord + Copy>(
    frame: &Frame,
    columns: &[&str],
    key: impl Fn(NaiveDate) -> K,
) -> BTreeMap<K, Vec<Mean>> {
    let selected: Vec<Option<&Column>> = columns.iter().map(|n| frame.column(n)).collect();
    let mut groups: BTreeMap<K, Vec<Mean>> = BTreeMap::new();

    for (row, wall) in frame.index().wall_clocks().enumerate() {
        let means = groups
            .entry(key(wall.date()))
            .or_insert_with(|| vec![Mean::default(); columns.len()]);
        for (mean, column) in means.iter_mut().zip(&selected) {
            mean.push(column.and_then(|c| c.values()[row]));
        }
    }
    groups
}

fn collect(columns: &[&str], labels: Vec<NaiveDate>, means: Vec<Vec<Mean>>) -> Resampled {
    let columns = columns
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(*name, means.iter().map(|m| m[i].get()).collect()))
        .collect();
    Resampled { labels, columns }
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// Monthly means by wall-clock calendar month, labelled with the month's last day.
/// Months without rows are omitted.
pub fn monthly_mean(frame: &Frame, columns: &[&str]) -> Resampled {
    let groups = group_means(frame, columns, |d| (d.year(), d.month()));
    let (labels, means) = groups
        .into_iter()
        .filter_map(|((y, m), means)| month_end(y, m).map(|label| (label, means)))
        .unzip();
    collect(columns, labels, means)
}

/// Yearly means for every calendar year from the first to the last row,
/// labelled with 31 December. Years without rows hold `None`.
pub fn yearly_mean(frame: &Frame, columns: &[&str]) -> Resampled {
    let mut groups = group_means(frame, columns, |d| d.year());
    let bounds = groups
        .keys()
        .next()
        .copied()
        .zip(groups.keys().next_back().copied());
    if let Some((first, last)) = bounds {
        for year in first..=last {
            groups
                .entry(year)
                .or_insert_with(|| vec![Mean::default(); columns.len()]);
        }
    }
    let (labels, means) = groups
        .into_iter()
        .filter_map(|(y, means)| NaiveDate::from_ymd_opt(y, 12, 31).map(|label| (label, means)))
        .unzip();
    collect(columns, labels, means)
}
