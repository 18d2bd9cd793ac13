//! In-memory plan storage for the planning service.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::models::CultivationPlan;

/// Plans created during the lifetime of the service process.
///
/// Cloning the store shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    plans: Arc<RwLock<HashMap<String, CultivationPlan>>>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, plan: CultivationPlan) {
        self.plans.write().await.insert(plan.id.clone(), plan);
    }

    pub async fn get(&self, id: &str) -> Option<CultivationPlan> {
        self.plans.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.plans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.plans.read().await.is_empty()
    }
}
