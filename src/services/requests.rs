//! Admin reservation-request service

use crate::{
    error::{AppError, AppResult},
    models::request::{Decision, ReservationRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List requests awaiting a decision
    pub async fn list_pending(&self) -> AppResult<Vec<ReservationRequest>> {
        self.repository.requests.list_pending().await
    }

    /// Apply an admin decision to a pending request.
    ///
    /// Approval flips the request status and the device flag in one
    /// transaction; disapproval deletes the request. Both are terminal.
    pub async fn decide(&self, request_id: i32, decision: Option<&str>) -> AppResult<Decision> {
        let decision = parse_decision(decision)?;
        match decision {
            Decision::Approve => self.repository.requests.approve(request_id).await?,
            Decision::Disapprove => self.repository.requests.delete(request_id).await?,
        }
        Ok(decision)
    }
}

fn parse_decision(value: Option<&str>) -> AppResult<Decision> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation("Request ID and decision are required.".to_string()))?;
    Decision::parse(value).ok_or_else(|| {
        AppError::Validation("Invalid decision. Use \"approve\" or \"disapprove\".".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_decisions() {
        assert_eq!(parse_decision(Some("approve")).unwrap(), Decision::Approve);
        assert_eq!(
            parse_decision(Some("disapprove")).unwrap(),
            Decision::Disapprove
        );
    }

    #[test]
    fn rejects_missing_decision() {
        assert!(parse_decision(None).is_err());
        assert!(parse_decision(Some("")).is_err());
    }

    #[test]
    fn rejects_unknown_decision() {
        assert!(parse_decision(Some("reject")).is_err());
    }
}
