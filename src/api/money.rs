//! Money management: transactions, dashboard, budgets, savings goals,
//! and date-ranged reports.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

const TRANSACTIONS_URL: &str = "/api/money/transactions";
const DASHBOARD_URL: &str = "/api/money/dashboard";
const BUDGETS_URL: &str = "/api/money/budgets";
const GOALS_URL: &str = "/api/money/savings-goals";
const REPORTS_URL: &str = "/api/money/reports";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MoneySummary {
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub savings: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: MoneySummary,
    #[serde(default)]
    pub expense_categories: Vec<CategoryTotal>,
    #[serde(default)]
    pub income_categories: Vec<CategoryTotal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Budget {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub spent: f64,
}

#[derive(Debug, Serialize)]
pub struct BudgetPayload {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoalProgress {
    current_amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct MoneyReport {
    pub summary: MoneySummary,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl ApiClient {
    pub async fn list_transactions(&self, kind: Option<TransactionKind>, limit: u32) -> Result<Vec<Transaction>, ApiError> {
        let mut query: Vec<(&str, String)> = vec![("limit", limit.to_string())];
        if let Some(kind) = kind {
            let name = match kind {
                TransactionKind::Income => "income",
                TransactionKind::Expense => "expense",
            };
            query.push(("type", name.to_string()));
        }
        self.get_query(TRANSACTIONS_URL, &query).await
    }

    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        self.post(TRANSACTIONS_URL, transaction).await
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", TRANSACTIONS_URL, id)).await
    }

    pub async fn money_dashboard(&self) -> Result<Dashboard, ApiError> {
        self.get(DASHBOARD_URL).await
    }

    pub async fn list_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        self.get(BUDGETS_URL).await
    }

    pub async fn save_budget(&self, budget: &BudgetPayload) -> Result<Budget, ApiError> {
        self.post(BUDGETS_URL, budget).await
    }

    pub async fn list_savings_goals(&self) -> Result<Vec<SavingsGoal>, ApiError> {
        self.get(GOALS_URL).await
    }

    pub async fn create_savings_goal(&self, goal: &NewSavingsGoal) -> Result<SavingsGoal, ApiError> {
        self.post(GOALS_URL, goal).await
    }

    pub async fn update_goal_progress(&self, id: &str, current_amount: f64) -> Result<SavingsGoal, ApiError> {
        self.put(&format!("{}/{}", GOALS_URL, id), &GoalProgress { current_amount }).await
    }

    pub async fn money_report(&self, start_date: &str, end_date: &str) -> Result<MoneyReport, ApiError> {
        self.get_query(REPORTS_URL, &[("startDate", start_date), ("endDate", end_date)]).await
    }
}
