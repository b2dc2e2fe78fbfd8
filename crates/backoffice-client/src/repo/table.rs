//! Process-wide in-memory table backing the mock services.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use backoffice_shared::{
    AttendanceRecord, Contract, Dept, Employee, Equipment, LeaveRecord, MeetingReservation,
    Notice, Role,
};
use tokio::sync::Mutex;

/// A row with a numeric primary key.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> i64 {
                self.id
            }
        })*
    };
}

impl_record!(
    AttendanceRecord,
    Contract,
    Dept,
    Employee,
    Equipment,
    LeaveRecord,
    MeetingReservation,
    Notice,
    Role,
);

/// Mutex-guarded rows plus a monotonic id counter.
///
/// Ids start past the highest seeded id and only ever grow, so a deleted
/// row's id is never handed out again.
pub struct MockTable<T> {
    rows: Mutex<Vec<T>>,
    next_id: AtomicI64,
    latency: Duration,
}

impl<T: Record> MockTable<T> {
    pub fn new(rows: Vec<T>, latency: Duration) -> Self {
        let max_id = rows.iter().map(Record::id).max().unwrap_or(0);
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(max_id + 1),
            latency,
        }
    }

    /// Simulated network delay.
    pub async fn pause(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.lock().await.clone()
    }

    pub async fn filter(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .lock()
            .await
            .iter()
            .filter(|row| keep(*row))
            .cloned()
            .collect()
    }

    pub async fn find(&self, id: i64) -> Option<T> {
        self.rows.lock().await.iter().find(|r| r.id() == id).cloned()
    }

    pub async fn prepend(&self, row: T) {
        self.rows.lock().await.insert(0, row);
    }

    pub async fn append(&self, row: T) {
        self.rows.lock().await.push(row);
    }

    /// Apply `change` to the row with `id`. Returns the updated row.
    pub async fn update(&self, id: i64, change: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.lock().await;
        let row = rows.iter_mut().find(|r| r.id() == id)?;
        change(row);
        Some(row.clone())
    }

    pub async fn remove(&self, id: i64) -> bool {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        rows.len() != before
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(id: i64) -> Dept {
        Dept {
            id,
            dept_name: format!("Dept {id}"),
            parent_id: 0,
            manager_name: None,
            dept_code: format!("D{id}"),
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let table = MockTable::new(vec![dept(1), dept(2), dept(3)], Duration::ZERO);

        let a = table.next_id();
        table.prepend(dept(a)).await;
        assert_eq!(a, 4);

        assert!(table.remove(a).await);
        let b = table.next_id();
        assert_ne!(a, b);
        assert!(table.find(b).await.is_none());
        assert_eq!(table.len().await, 3);
    }

    #[tokio::test]
    async fn update_and_remove_missing() {
        let table = MockTable::new(vec![dept(1)], Duration::ZERO);
        assert!(table.update(9, |d| d.dept_name.clear()).await.is_none());
        assert!(!table.remove(9).await);

        let updated = table
            .update(1, |d| d.dept_name = "Renamed".into())
            .await
            .unwrap();
        assert_eq!(updated.dept_name, "Renamed");
    }

    #[tokio::test]
    async fn empty_table_starts_at_one() {
        let table: MockTable<Dept> = MockTable::new(Vec::new(), Duration::ZERO);
        assert_eq!(table.next_id(), 1);
        assert_eq!(table.next_id(), 2);
    }
}
