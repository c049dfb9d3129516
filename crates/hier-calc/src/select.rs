use rayon::prelude::*;

use hier_core::{ErrorInfo, HierError, HierarchyTag, LoopContribution, LoopOrder};
use hier_table::ExpansionDepth;

use crate::assemble::MassInput;
use crate::calculator::HierarchyCalculator;
use crate::result::{CandidateReport, Selection};
use crate::suitability::{is_suitable, MassOrdering};

fn no_hierarchy(code: &str, message: &str, is_bottom: bool) -> HierError {
    HierError::InvalidSpectrum(
        ErrorInfo::new(code, message).with_context("is_bottom", is_bottom.to_string()),
    )
}

impl HierarchyCalculator<'_> {
    /// Ranks every suitable hierarchy against the exact two-loop reference.
    ///
    /// Ties go to the hierarchy first in canonical order, also when candidates
    /// are evaluated in parallel.
    pub fn select_hierarchy(&self, is_bottom: bool) -> Result<Selection, HierError> {
        let ordering = MassOrdering::new(self.params(), self.constants(), is_bottom);
        let rule = self.opts().h9q2_rule;
        let suitable: Vec<HierarchyTag> = HierarchyTag::ALL
            .into_iter()
            .filter(|tag| {
                let ok = is_suitable(*tag, &ordering, rule);
                if !ok {
                    tracing::trace!(tag = %tag, "hierarchy not suitable for mass ordering");
                }
                ok
            })
            .collect();
        if suitable.is_empty() {
            return Err(no_hierarchy(
                "no-suitable-hierarchy",
                "no hierarchy is suitable for the mass ordering",
                is_bottom,
            ));
        }

        let base = self.tree_level() + self.one_loop(is_bottom);
        let candidates = self.evaluate_candidates(&suitable, is_bottom, base)?;

        let mut best: Option<(usize, f64)> = None;
        for (index, report) in candidates.iter().enumerate() {
            let Some(error) = report.error.filter(|_| report.is_ranked()) else {
                continue;
            };
            match best {
                Some((_, best_error)) if error >= best_error => {}
                _ => best = Some((index, error)),
            }
        }
        let Some((index, error)) = best else {
            return Err(no_hierarchy(
                "all-hierarchies-excluded",
                "every suitable hierarchy was excluded",
                is_bottom,
            ));
        };
        let chosen = &candidates[index];
        let reference_mass = chosen.reference_mass.unwrap_or(f64::NAN);
        tracing::debug!(tag = %chosen.tag, error, "selected hierarchy");
        Ok(Selection {
            tag: chosen.tag,
            error,
            reference_mass,
            candidates,
        })
    }

    fn evaluate_candidates(
        &self,
        tags: &[HierarchyTag],
        is_bottom: bool,
        base: LoopContribution,
    ) -> Result<Vec<CandidateReport>, HierError> {
        if self.opts().threads <= 1 {
            return Ok(tags
                .iter()
                .map(|tag| self.evaluate_candidate(*tag, is_bottom, base))
                .collect());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.opts().threads)
            .build()
            .map_err(|err| HierError::Config(ErrorInfo::new("thread_pool", err.to_string())))?;
        let mut ordered: Vec<(usize, CandidateReport)> = pool.install(|| {
            tags.par_iter()
                .enumerate()
                .map(|(index, tag)| (index, self.evaluate_candidate(*tag, is_bottom, base)))
                .collect()
        });
        ordered.sort_by_key(|(index, _)| *index);
        Ok(ordered.into_iter().map(|(_, report)| report).collect())
    }

    fn evaluate_candidate(
        &self,
        tag: HierarchyTag,
        is_bottom: bool,
        base: LoopContribution,
    ) -> CandidateReport {
        let exact = match self.exact_two_loop(tag, is_bottom) {
            Ok(exact) => exact,
            Err(err) => {
                tracing::warn!(tag = %tag, error = %err, "excluding hierarchy");
                return CandidateReport::excluded(tag, true, err.to_string());
            }
        };
        let expanded = match self.expansion(
            tag,
            is_bottom,
            LoopOrder::Two,
            MassInput::DrBar,
            &ExpansionDepth::leading(),
        ) {
            Ok(matrix) => matrix,
            Err(err) => {
                tracing::warn!(tag = %tag, error = %err, "excluding hierarchy");
                return CandidateReport::excluded(tag, exact.retried, err.to_string());
            }
        };

        let reference =
            (base + self.shift_correction(tag, is_bottom) + exact.matrix).lightest_mass();
        let candidate = (base + expanded).lightest_mass();
        let error = (reference - candidate).abs();
        if !error.is_finite() {
            tracing::warn!(
                tag = %tag,
                reference,
                candidate,
                "excluding hierarchy with non-finite mass"
            );
            return CandidateReport {
                tag,
                reference_mass: reference.is_finite().then_some(reference),
                expanded_mass: candidate.is_finite().then_some(candidate),
                error: None,
                retried: exact.retried,
                excluded: Some("non-finite lightest mass".to_string()),
            };
        }
        tracing::debug!(tag = %tag, reference, candidate, error, "evaluated hierarchy candidate");
        CandidateReport {
            tag,
            reference_mass: Some(reference),
            expanded_mass: Some(candidate),
            error: Some(error),
            retried: exact.retried,
            excluded: None,
        }
    }
}
