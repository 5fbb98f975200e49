use crate::errors::Result;
use crate::plans::plans_model::PlanRecord;

/// Persistence seam for the plan board, full-array per read/write like the
/// month store.
pub trait PlanRepositoryTrait {
    fn load_plans(&self) -> Result<Vec<PlanRecord>>;
    fn save_plans(&self, plans: &[PlanRecord]) -> Result<()>;
}
