use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::incomes_model::{Income, IncomeUpdate, NewIncome};
use super::incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::errors::Result;
use crate::utils::time_utils::month_range;

/// Service for managing income records.
pub struct IncomeService {
    repository: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    /// Creates a new IncomeService instance.
    pub fn new(repository: Arc<dyn IncomeRepositoryTrait>) -> Self {
        IncomeService { repository }
    }
}

#[async_trait]
impl IncomeServiceTrait for IncomeService {
    async fn add_income(&self, user_id: &str, mut new_income: NewIncome) -> Result<Income> {
        new_income.validate()?;
        if new_income.id.is_none() {
            new_income.id = Some(Uuid::new_v4().to_string());
        }
        debug!(
            "Recording income from '{}' for user {}",
            new_income.source, user_id
        );
        self.repository.create(user_id, new_income).await
    }

    async fn update_income(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income> {
        income_update.validate()?;
        self.repository.update(user_id, income_update).await
    }

    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<()> {
        self.repository.delete(user_id, income_id).await
    }

    fn get_incomes(&self, user_id: &str) -> Result<Vec<Income>> {
        self.repository.list_for_user(user_id)
    }

    fn get_incomes_for_month(&self, user_id: &str, year: i32, month: u32) -> Result<Vec<Income>> {
        let (start, end) = month_range(year, month)?;
        self.repository.list_for_user_in_range(user_id, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct EchoIncomeRepository;

    #[async_trait]
    impl IncomeRepositoryTrait for EchoIncomeRepository {
        async fn create(&self, user_id: &str, new_income: NewIncome) -> Result<Income> {
            let now = Utc::now().naive_utc();
            Ok(Income {
                id: new_income.id.expect("service assigns an id"),
                user_id: user_id.to_string(),
                amount: new_income.amount,
                source: new_income.source,
                description: new_income.description,
                income_date: new_income.income_date,
                created_at: now,
                updated_at: now,
            })
        }
        async fn update(&self, _: &str, _: IncomeUpdate) -> Result<Income> {
            unimplemented!()
        }
        async fn delete(&self, _: &str, _: &str) -> Result<()> {
            unimplemented!()
        }
        fn get_for_user(&self, _: &str, _: &str) -> Result<Income> {
            unimplemented!()
        }
        fn list_for_user(&self, _: &str) -> Result<Vec<Income>> {
            unimplemented!()
        }
        fn list_for_user_in_range(
            &self,
            _: &str,
            _: NaiveDate,
            _: NaiveDate,
        ) -> Result<Vec<Income>> {
            unimplemented!()
        }
        fn sum_for_user(&self, _: &str) -> Result<Decimal> {
            unimplemented!()
        }
        fn sum_for_user_in_range(&self, _: &str, _: NaiveDate, _: NaiveDate) -> Result<Decimal> {
            unimplemented!()
        }
    }

    fn new_income(amount: Decimal) -> NewIncome {
        NewIncome {
            id: None,
            amount,
            source: "Salary".to_string(),
            description: None,
            income_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        }
    }

    #[tokio::test]
    async fn add_income_assigns_an_id_when_missing() {
        let service = IncomeService::new(Arc::new(EchoIncomeRepository));

        let income = service.add_income("user-1", new_income(dec!(100))).await.unwrap();

        assert!(!income.id.is_empty());
        assert_eq!(income.user_id, "user-1");
    }

    #[tokio::test]
    async fn add_income_rejects_invalid_input_before_the_store() {
        let service = IncomeService::new(Arc::new(EchoIncomeRepository));

        let result = service.add_income("user-1", new_income(dec!(-1))).await;

        assert!(result.is_err());
    }
}
