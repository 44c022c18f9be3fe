use std::collections::HashMap;
use std::time::Duration;

use tokio::{sync::RwLock, time::Instant};

use crate::models::Member;

struct Board {
    members: Vec<Member>,
    touched: Instant,
}

impl Board {
    fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            touched: Instant::now(),
        }
    }
}

/// Members page view state, one list per session token.
///
/// Loading the page replaces the list with server data; toggles and locally
/// built records only ever change this copy and are never sent back. Lists
/// untouched for longer than `idle` are dropped on the next write.
pub struct MemberBoards {
    boards: RwLock<HashMap<String, Board>>,
    idle: Duration,
}

impl MemberBoards {
    pub fn new(idle: Duration) -> Self {
        Self {
            boards: RwLock::new(HashMap::new()),
            idle,
        }
    }

    fn sweep(&self, boards: &mut HashMap<String, Board>) {
        let before = boards.len();
        boards.retain(|_, board| board.touched.elapsed() < self.idle);
        if boards.len() < before {
            tracing::info!("Evicted {} idle member views", before - boards.len());
        }
    }

    pub async fn replace(&self, token: &str, members: Vec<Member>) {
        let mut boards = self.boards.write().await;
        self.sweep(&mut boards);
        boards.insert(token.to_string(), Board::new(members));
    }

    pub async fn snapshot(&self, token: &str) -> Option<Vec<Member>> {
        self.boards
            .read()
            .await
            .get(token)
            .filter(|board| board.touched.elapsed() < self.idle)
            .map(|board| board.members.clone())
    }

    /// Flips activation of member `id`. `None` when nothing was loaded for
    /// the session, or the list has gone idle.
    pub async fn toggle(&self, token: &str, id: &str) -> Option<Vec<Member>> {
        let mut boards = self.boards.write().await;
        self.sweep(&mut boards);
        let board = boards.get_mut(token)?;
        board.touched = Instant::now();

        if let Some(member) = board.members.iter_mut().find(|member| member.id == id) {
            member.is_active = !member.is_active;
            tracing::info!("Member {} marked {}", id, if member.is_active { "active" } else { "inactive" });
        } else {
            tracing::warn!("Toggle requested for unknown member: {}", id);
        }
        Some(board.members.clone())
    }

    pub async fn append(&self, token: &str, member: Member) -> Vec<Member> {
        let mut boards = self.boards.write().await;
        self.sweep(&mut boards);
        let board = boards
            .entry(token.to_string())
            .or_insert_with(|| Board::new(Vec::new()));
        board.touched = Instant::now();
        board.members.push(member);
        board.members.clone()
    }

    pub async fn forget(&self, token: &str) {
        self.boards.write().await.remove(token);
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.boards.read().await.len()
    }
}
