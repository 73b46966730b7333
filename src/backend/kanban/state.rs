use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::kanban::{Board, Card, List, ListWithCards};

/// In-memory authoritative Kanban state.
///
/// Boards, lists, and cards are kept in flat maps keyed by id; group
/// membership is by foreign key (`board_id`, `list_id`). Accessors that
/// return collections always sort by position.
#[derive(Clone, Debug, Default)]
pub struct KanbanState {
    boards: HashMap<Uuid, Board>,
    lists: HashMap<Uuid, List>,
    cards: HashMap<Uuid, Card>,
}

impl KanbanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self, id: Uuid) -> Option<&Board> {
        self.boards.get(&id)
    }

    pub fn boards(&self) -> Vec<Board> {
        let mut boards: Vec<Board> = self.boards.values().cloned().collect();
        boards.sort_by_key(|b| (b.created_at, b.id));
        boards
    }

    pub fn list(&self, id: Uuid) -> Option<&List> {
        self.lists.get(&id)
    }

    pub fn card(&self, id: Uuid) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub fn insert_board(&mut self, board: Board) {
        self.boards.insert(board.id, board);
    }

    pub fn upsert_list(&mut self, list: List) {
        self.lists.insert(list.id, list);
    }

    pub fn upsert_card(&mut self, card: Card) {
        self.cards.insert(card.id, card);
    }

    /// Lists of a board, ascending by position.
    pub fn lists_of_board(&self, board_id: Uuid) -> Vec<List> {
        let mut lists: Vec<List> = self
            .lists
            .values()
            .filter(|l| l.board_id == board_id)
            .cloned()
            .collect();
        lists.sort_by_key(|l| (l.position, l.id));
        lists
    }

    /// Cards of a list, ascending by position.
    pub fn cards_of_list(&self, list_id: Uuid) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .cards
            .values()
            .filter(|c| c.list_id == list_id)
            .cloned()
            .collect();
        cards.sort_by_key(|c| (c.position, c.id));
        cards
    }

    pub fn count_lists(&self, board_id: Uuid) -> usize {
        self.lists.values().filter(|l| l.board_id == board_id).count()
    }

    pub fn count_cards(&self, list_id: Uuid) -> usize {
        self.cards.values().filter(|c| c.list_id == list_id).count()
    }

    /// Remove a board together with its lists and cards.
    pub fn remove_board(&mut self, id: Uuid) -> Option<Board> {
        let board = self.boards.remove(&id)?;
        self.lists.retain(|_, l| l.board_id != id);
        self.cards.retain(|_, c| c.board_id != id);
        Some(board)
    }

    /// Remove a list together with its cards. Survivor positions are the
    /// caller's responsibility.
    pub fn remove_list(&mut self, id: Uuid) -> Option<List> {
        let list = self.lists.remove(&id)?;
        self.cards.retain(|_, c| c.list_id != id);
        Some(list)
    }

    pub fn remove_card(&mut self, id: Uuid) -> Option<Card> {
        self.cards.remove(&id)
    }

    /// Write back a recomputed list sequence.
    pub fn apply_lists(&mut self, lists: &[List]) {
        for list in lists {
            self.lists.insert(list.id, list.clone());
        }
    }

    /// Write back a recomputed card sequence.
    pub fn apply_cards(&mut self, cards: &[Card]) {
        for card in cards {
            self.cards.insert(card.id, card.clone());
        }
    }

    /// A list populated with its ordered cards.
    pub fn list_with_cards(&self, list: &List) -> ListWithCards {
        ListWithCards::new(list.clone(), self.cards_of_list(list.id))
    }

    /// All lists of a board populated with their ordered cards.
    pub fn board_view(&self, board_id: Uuid) -> Vec<ListWithCards> {
        self.lists_of_board(board_id)
            .into_iter()
            .map(|list| {
                let cards = self.cards_of_list(list.id);
                ListWithCards::new(list, cards)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_sorted_by_position() {
        let mut state = KanbanState::new();
        let board = Board::new("b", None);
        let board_id = board.id;
        state.insert_board(board);
        state.upsert_list(List::new(board_id, "second", 1));
        state.upsert_list(List::new(board_id, "first", 0));

        let lists = state.lists_of_board(board_id);
        assert_eq!(lists[0].title, "first");
        assert_eq!(lists[1].title, "second");
    }

    #[test]
    fn test_remove_board_cascades() {
        let mut state = KanbanState::new();
        let board = Board::new("b", None);
        let board_id = board.id;
        state.insert_board(board);
        let list = List::new(board_id, "l", 0);
        let list_id = list.id;
        state.upsert_list(list);
        state.upsert_card(Card::new(list_id, board_id, "c", None, None, 0));

        state.remove_board(board_id);

        assert!(state.board(board_id).is_none());
        assert!(state.lists_of_board(board_id).is_empty());
        assert!(state.cards_of_list(list_id).is_empty());
    }

    #[test]
    fn test_remove_list_drops_its_cards() {
        let mut state = KanbanState::new();
        let board = Board::new("b", None);
        let board_id = board.id;
        state.insert_board(board);
        let list = List::new(board_id, "l", 0);
        let list_id = list.id;
        state.upsert_list(list);
        state.upsert_card(Card::new(list_id, board_id, "c", None, None, 0));

        let removed = state.remove_list(list_id);

        assert!(removed.is_some());
        assert!(state.cards_of_list(list_id).is_empty());
    }

    #[test]
    fn test_board_view_orders_cards() {
        let mut state = KanbanState::new();
        let board = Board::new("b", None);
        let board_id = board.id;
        state.insert_board(board);
        let list = List::new(board_id, "l", 0);
        let list_id = list.id;
        state.upsert_list(list);
        state.upsert_card(Card::new(list_id, board_id, "y", None, None, 1));
        state.upsert_card(Card::new(list_id, board_id, "x", None, None, 0));

        let view = state.board_view(board_id);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].cards[0].title, "x");
        assert_eq!(view[0].cards[1].title, "y");
    }
}
