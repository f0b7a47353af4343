//! Board creation and square colouring
//!
//! The board is a grid of flat sprites under one [`BoardRoot`], with a dark
//! frame sprite behind it for the stroke. Squares are spawned column by
//! column, each with a click observer.
//!
//! Board pixels (origin at the top-left of square (1, 1), y down) are mapped
//! to world space by [`BoardLayout`]; the 2D camera sits at the board centre.

use crate::core::ViewConfig;
use crate::game::systems::input::on_square_click;
use crate::game::{BoardSize, Position};
use crate::view::{BoardGeometry, ChessSession};
use bevy::prelude::*;

/// Marker for the entity parenting squares and pieces
#[derive(Component, Debug)]
pub struct BoardRoot;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare {
    pub position: Position,
}

/// Square currently highlighted as the pending selection
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardHighlight(pub Option<Position>);

pub const SELECTED_COLOR: Color = Color::srgb(0.663, 0.663, 0.663);
pub const EVEN_COLOR: Color = Color::srgb(0.502, 0.502, 0.502);
pub const ODD_COLOR: Color = Color::WHITE;
pub const STROKE_COLOR: Color = Color::BLACK;

/// Fill of the square at `position`
pub fn square_color(position: Position, highlighted: Option<Position>) -> Color {
    if highlighted == Some(position) {
        SELECTED_COLOR
    } else if position.is_even() {
        EVEN_COLOR
    } else {
        ODD_COLOR
    }
}

/// Mapping from board pixels to world coordinates
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub geometry: BoardGeometry,
    pub board_size: BoardSize,
}

impl BoardLayout {
    pub fn new(geometry: BoardGeometry, board_size: BoardSize) -> Self {
        Self {
            geometry,
            board_size,
        }
    }

    pub fn extent(&self) -> Vec2 {
        self.geometry.extent(self.board_size)
    }

    /// World centre of a square-sized node whose top-left corner is at `top_left`
    pub fn node_center(&self, top_left: Vec2) -> Vec2 {
        let extent = self.extent();
        let half = self.geometry.square_size / 2.0;
        Vec2::new(
            top_left.x + half - extent.x / 2.0,
            extent.y / 2.0 - top_left.y - half,
        )
    }

    pub fn square_center(&self, position: Position) -> Vec2 {
        self.node_center(self.geometry.origin_of(position))
    }
}

/// Spawns the frame and every square of the session's board
pub fn spawn_board(
    mut commands: Commands,
    session: Res<ChessSession>,
    config: Res<ViewConfig>,
    highlight: Res<BoardHighlight>,
) {
    let view = session.view();
    let Some(board_size) = view.board_size() else {
        error!("[BOARD] Session has no board size, nothing to draw");
        return;
    };
    let layout = BoardLayout::new(view.geometry(), board_size);
    let square = layout.geometry.square_size;
    let stroke = config.stroke_width;

    let root = commands
        .spawn((
            Name::new("Board"),
            BoardRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    commands.spawn((
        Name::new("Board frame"),
        Sprite::from_color(STROKE_COLOR, layout.extent() + Vec2::splat(2.0 * stroke)),
        Transform::from_xyz(0.0, 0.0, -1.0),
        ChildOf(root),
    ));

    for position in board_size.positions() {
        let center = layout.square_center(position);
        commands
            .spawn((
                Name::new(format!("Square {}", position)),
                BoardSquare { position },
                Sprite::from_color(square_color(position, highlight.0), Vec2::splat(square)),
                Transform::from_xyz(center.x, center.y, 0.0),
                ChildOf(root),
            ))
            .observe(on_square_click);
    }

    info!(
        "[BOARD] Spawned {}x{} board, square size {}",
        board_size.columns, board_size.rows, square
    );
    commands.insert_resource(layout);
}

/// Recolours squares after the highlight changed
pub fn refresh_square_colors(
    highlight: Res<BoardHighlight>,
    mut squares: Query<(&BoardSquare, &mut Sprite)>,
) {
    for (square, mut sprite) in squares.iter_mut() {
        sprite.color = square_color(square.position, highlight.0);
    }
}
