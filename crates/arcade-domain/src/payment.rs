//! Payment records: billable obligations with paid/unpaid status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, PaymentKind, PaymentStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub kind: PaymentKind,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    pub fn new(tenant_id: Uuid, kind: PaymentKind, amount: f64, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            kind,
            amount,
            due_date,
            status: PaymentStatus::Unpaid,
        }
    }

    pub fn is_unpaid(&self) -> bool {
        self.status == PaymentStatus::Unpaid
    }
}

impl Identifiable for PaymentRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}
