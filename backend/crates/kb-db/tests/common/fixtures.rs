use kb_core::{Board, BoardKind, Card, Column};
use kb_db::{BoardStore, NewBoard, NewCard, NewColumn};

use uuid::Uuid;

pub async fn create_personal_board(store: &BoardStore, owner_id: Uuid) -> Board {
    let input = NewBoard {
        name: "Test Board".to_string(),
        ..Default::default()
    };
    store
        .create_board(&input, owner_id)
        .await
        .expect("Failed to create board")
        .board
}

pub async fn create_team_board(store: &BoardStore, owner_id: Uuid, team_id: Uuid) -> Board {
    let input = NewBoard {
        name: "Team Board".to_string(),
        kind: BoardKind::Team,
        team_id: Some(team_id),
        ..Default::default()
    };
    store
        .create_board(&input, owner_id)
        .await
        .expect("Failed to create board")
        .board
}

pub async fn create_column(store: &BoardStore, board_id: Uuid, name: &str) -> Column {
    let input = NewColumn {
        name: name.to_string(),
        ..Default::default()
    };
    store
        .create_column(board_id, &input)
        .await
        .expect("Failed to create column")
        .column
}

pub async fn create_card(store: &BoardStore, column_id: Uuid, title: &str, user_id: Uuid) -> Card {
    let input = NewCard {
        title: title.to_string(),
        ..Default::default()
    };
    store
        .create_card(column_id, &input, user_id)
        .await
        .expect("Failed to create card")
        .card
}

/// Column with one card per title, in order
pub async fn create_column_with_cards(
    store: &BoardStore,
    board_id: Uuid,
    name: &str,
    titles: &[&str],
    user_id: Uuid,
) -> (Column, Vec<Card>) {
    let column = create_column(store, board_id, name).await;
    let mut cards = Vec::with_capacity(titles.len());
    for title in titles {
        cards.push(create_card(store, column.id, title, user_id).await);
    }
    (column, cards)
}

pub fn titles(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|card| card.title.clone()).collect()
}

pub fn names(columns: &[Column]) -> Vec<String> {
    columns.iter().map(|column| column.name.clone()).collect()
}

pub fn positions<T>(items: &[T], position: impl Fn(&T) -> i32) -> Vec<i32> {
    items.iter().map(position).collect()
}
