//! Candidate sourcing from the vendor catalog
//!
//! Filters the catalog down to offers that can plausibly work for the
//! client and enumerates their cross product in a fixed order.

use shared::{
    normalize_label, BudgetAllocation, ClientRequirements, ServiceCategory, SourcingSummary,
    VendorCombination, VendorOffer,
};

use crate::config::SourcingConfig;

/// Combinations sourced for one allocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourcingResult {
    pub combinations: Vec<VendorCombination>,
    pub considered_offers: usize,
    pub filtered_offers: usize,

    /// Required categories left with no usable offer
    pub missing_categories: Vec<ServiceCategory>,
}

impl SourcingResult {
    pub fn summary(&self) -> SourcingSummary {
        SourcingSummary {
            considered_offers: self.considered_offers,
            filtered_offers: self.filtered_offers,
            combinations_sourced: self.combinations.len(),
            missing_categories: self.missing_categories.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

/// Builds vendor combinations from catalog offers
#[derive(Debug, Clone, Default)]
pub struct CombinationBuilder {
    config: SourcingConfig,
}

impl CombinationBuilder {
    pub fn new(config: SourcingConfig) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        catalog: &[VendorOffer],
        requirements: &ClientRequirements,
        allocation: &BudgetAllocation,
    ) -> SourcingResult {
        let guest_count = requirements.guest_count;
        let mut result = SourcingResult::default();
        let mut groups: Vec<Vec<&VendorOffer>> = Vec::new();

        for category in requirements.required_sorted() {
            let candidates: Vec<&VendorOffer> = catalog.iter().filter(|offer| offer.category == category).collect();
            let candidate_count = candidates.len();

            let mut usable: Vec<&VendorOffer> = candidates
                .into_iter()
                .filter(|offer| self.admits(offer, requirements, allocation))
                .collect();
            result.considered_offers += candidate_count;
            result.filtered_offers += candidate_count - usable.len();

            if usable.is_empty() {
                result.missing_categories.push(category);
                continue;
            }

            usable.sort_by(|a, b| {
                a.cost_for(guest_count)
                    .total_cmp(&b.cost_for(guest_count))
                    .then_with(|| a.id.cmp(&b.id))
            });
            usable.truncate(self.config.max_offers_per_category);
            groups.push(usable);
        }

        if !result.missing_categories.is_empty() {
            tracing::debug!(missing = ?result.missing_categories, "Sourcing left required categories empty");
            return result;
        }

        result.combinations = self.cross_product(&groups, guest_count);
        tracing::debug!(
            considered = result.considered_offers,
            filtered = result.filtered_offers,
            combinations = result.combinations.len(),
            "Sourced combinations for {}",
            allocation.strategy
        );
        result
    }

    fn admits(&self, offer: &VendorOffer, requirements: &ClientRequirements, allocation: &BudgetAllocation) -> bool {
        if !offer.fits_guest_count(requirements.guest_count) {
            return false;
        }

        if self.config.restrict_to_location
            && !requirements.location.trim().is_empty()
            && normalize_label(&offer.city) != normalize_label(&requirements.location)
        {
            return false;
        }

        match allocation.amount_for(offer.category) {
            Some(allocated) if allocated > 0.0 => {
                offer.cost_for(requirements.guest_count) <= allocated * (1.0 + self.config.overspend_tolerance)
            }
            _ => true,
        }
    }

    /// Odometer-style enumeration: the last category varies fastest
    fn cross_product(&self, groups: &[Vec<&VendorOffer>], guest_count: u32) -> Vec<VendorCombination> {
        if groups.is_empty() {
            return Vec::new();
        }

        let mut combinations = Vec::new();
        let mut indices = vec![0usize; groups.len()];

        'outer: loop {
            if combinations.len() >= self.config.max_combinations {
                break;
            }

            let offers: Vec<VendorOffer> = indices
                .iter()
                .zip(groups)
                .map(|(index, group)| group[*index].clone())
                .collect();
            combinations.push(VendorCombination::from_offers(offers, guest_count));

            for position in (0..groups.len()).rev() {
                indices[position] += 1;
                if indices[position] < groups[position].len() {
                    continue 'outer;
                }
                indices[position] = 0;
            }
            break;
        }

        combinations
    }
}
