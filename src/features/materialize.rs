use ndarray::Array1;
use sprs::{CsMat, TriMat};
use tracing::{instrument, warn};

use super::{Family, Feature, FeatureExtractor, Observation};
use crate::error::{FeatureError, Result};
use crate::types::Vector;
use crate::wire_representation::CandyKind;

impl<I> FeatureExtractor<I> {
    fn offset_column(&self, family: Family, offset: &Vector) -> Result<usize> {
        match self.index.get(offset) {
            Some(slot) => Ok(self.prefix.start(family) + slot),
            None => {
                warn!(%family, %offset, "offset outside of the indexed radius");
                Err(FeatureError::OffsetOutOfRange {
                    family,
                    dx: offset.x,
                    dy: offset.y,
                })
            }
        }
    }

    fn scalar_column(&self, family: Family, value: i64) -> Result<usize> {
        let max = self.prefix.half_extent() as i64;
        if !(0..=max).contains(&value) {
            warn!(%family, value, max, "distance outside of its family");
            return Err(FeatureError::ScalarOutOfRange { family, value, max });
        }
        Ok(self.prefix.start(family) + value as usize)
    }

    /// the column a feature resolves to in every materialized vector
    pub fn column(&self, feature: &Feature) -> Result<usize> {
        match feature {
            Feature::Trapped => Ok(self.prefix.total() - 1),
            Feature::Candy(CandyKind::Standard, offset) => {
                self.offset_column(Family::Candy1, offset)
            }
            Feature::Candy(CandyKind::Bonus, offset) => self.offset_column(Family::Candy2, offset),
            Feature::AdvHead(offset) => self.offset_column(Family::AdvHead, offset),
            Feature::AdvTail(offset) => self.offset_column(Family::AdvTail, offset),
            Feature::MyTail(offset) => self.offset_column(Family::MyTail, offset),
            Feature::X(d) => self.scalar_column(Family::X, *d),
            Feature::Y(d) => self.scalar_column(Family::Y, *d),
        }
    }

    /// Sums observation weights into a dense vector of width `dimension()`.
    /// Repeated features accumulate.
    #[instrument(level = "trace", skip_all)]
    pub fn to_dense(&self, observations: &[Observation]) -> Result<Array1<f64>> {
        let mut dense = Array1::<f64>::zeros(self.dimension());
        for (feature, weight) in observations {
            dense[self.column(feature)?] += *weight;
        }
        Ok(dense)
    }

    /// A 1 x `dimension()` sparse matrix with a weight of one per observation.
    /// Observations sharing a column fold into one stored entry holding their
    /// count, so the row stores one entry per distinct column.
    pub fn to_sparse_row(&self, observations: &[Observation]) -> Result<CsMat<f64>> {
        self.to_sparse_batch(&[observations])
    }

    /// Stacks one row per observation list into a sparse matrix of width
    /// `dimension()`. Every observation contributes a weight of one to its
    /// column; observations sharing a column in the same row are summed into a
    /// single stored entry, so row pointers count distinct columns rather than
    /// observations.
    #[instrument(level = "trace", skip_all)]
    pub fn to_sparse_batch<O: AsRef<[Observation]>>(&self, batch: &[O]) -> Result<CsMat<f64>> {
        let entries: usize = batch.iter().map(|o| o.as_ref().len()).sum();
        let mut triplets = TriMat::with_capacity((batch.len(), self.dimension()), entries);
        for (row, observations) in batch.iter().enumerate() {
            for (feature, _) in observations.as_ref() {
                triplets.add_triplet(row, self.column(feature)?, 1.0);
            }
        }
        Ok(triplets.to_csr())
    }
}
