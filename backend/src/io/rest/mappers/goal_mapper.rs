use shared::Goal;

use crate::domain::dates::date_key;
use crate::domain::models::goal::Goal as DomainGoal;

pub struct GoalMapper;

impl GoalMapper {
    /// Convert a domain goal to its wire DTO
    pub fn to_dto(domain: DomainGoal) -> Goal {
        Goal {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            start_date: date_key(domain.start_date),
            end_date: date_key(domain.end_date),
            // BTreeSet iteration order keeps the wire form sorted
            completed_dates: domain.completed_dates.into_iter().collect(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }

    pub fn to_dto_list(domain_goals: Vec<DomainGoal>) -> Vec<Goal> {
        domain_goals.into_iter().map(Self::to_dto).collect()
    }
}
