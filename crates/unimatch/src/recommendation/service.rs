use std::sync::Arc;

use tracing::info;

use super::domain::ExplainedRecommendation;
use super::explain::{Explainer, TemplateExplainer};
use super::guard::{ProfileGuard, ProfileViolation, RecommendationRequest};
use super::ranker::{RecommendationConfig, RecommendationEngine};
use crate::catalog::{Catalog, CatalogError, CatalogProvider, University};

/// Service composing the profile guard, catalog provider, ranking engine, and explainer.
pub struct RecommendationService<C> {
    guard: ProfileGuard,
    catalog: Arc<C>,
    engine: RecommendationEngine,
    explainer: Arc<dyn Explainer>,
}

impl<C> RecommendationService<C>
where
    C: CatalogProvider + 'static,
{
    pub fn new(catalog: Arc<C>, config: RecommendationConfig) -> Self {
        Self::with_explainer(catalog, config, Arc::new(TemplateExplainer))
    }

    pub fn with_explainer(
        catalog: Arc<C>,
        config: RecommendationConfig,
        explainer: Arc<dyn Explainer>,
    ) -> Self {
        Self {
            guard: ProfileGuard,
            catalog,
            engine: RecommendationEngine::new(config),
            explainer,
        }
    }

    /// Validate the request, rank the catalog, and annotate each result.
    pub fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<Vec<ExplainedRecommendation>, RecommendationServiceError> {
        let profile = self.guard.profile_from_request(request)?;
        let catalog = self.catalog.load()?;

        let results = self.engine.recommend(catalog.universities(), &profile);

        info!(
            ent_score = ?profile.ent_score,
            city = ?profile.preferred_city,
            specialties = profile.preferred_specialties.len(),
            budget = profile.budget.label(),
            found = results.len(),
            "recommendations ranked"
        );

        Ok(results
            .into_iter()
            .map(|result| ExplainedRecommendation {
                explanation: self.explainer.explain(&profile, &result),
                result,
            })
            .collect())
    }

    pub fn catalog(&self) -> Result<Arc<Catalog>, RecommendationServiceError> {
        Ok(self.catalog.load()?)
    }

    pub fn university(&self, id: u32) -> Result<University, RecommendationServiceError> {
        let catalog = self.catalog.load()?;
        catalog
            .find(id)
            .cloned()
            .ok_or(RecommendationServiceError::UniversityNotFound(id))
    }

    /// Fetch the requested universities in request order, skipping unknown ids.
    pub fn compare(&self, ids: &[u32]) -> Result<Vec<University>, RecommendationServiceError> {
        if ids.len() < 2 {
            return Err(RecommendationServiceError::ComparisonTooSmall { selected: ids.len() });
        }

        let catalog = self.catalog.load()?;
        let selected: Vec<University> = ids
            .iter()
            .filter_map(|id| catalog.find(*id).cloned())
            .collect();

        if selected.is_empty() {
            return Err(RecommendationServiceError::NothingToCompare);
        }

        Ok(selected)
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    InvalidProfile(#[from] ProfileViolation),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("university {0} not found")]
    UniversityNotFound(u32),
    #[error("select at least two universities to compare (got {selected})")]
    ComparisonTooSmall { selected: usize },
    #[error("none of the selected universities were found")]
    NothingToCompare,
}
