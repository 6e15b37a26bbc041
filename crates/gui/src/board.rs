//! Chess board widget rendering

use crate::assets::PieceImages;
use crate::config::DisplayConfig;
use crate::game::PlaySession;
use crate::styles::{self, blend_colors};
use chess_sim::{PieceKind, Square};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Background, Border, Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(Square),
}

/// Renders the chess board
pub struct BoardView<'a> {
    session: &'a PlaySession,
    images: &'a PieceImages,
    config: &'a DisplayConfig,
    flipped: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(
        session: &'a PlaySession,
        images: &'a PieceImages,
        config: &'a DisplayConfig,
        flipped: bool,
    ) -> Self {
        Self {
            session,
            images,
            config,
            flipped,
        }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        for r in 0..8i8 {
            let display_row = if self.flipped { 7 - r } else { r };
            let mut board_row = row![].spacing(0);

            for c in 0..8i8 {
                let display_col = if self.flipped { 7 - c } else { c };
                board_row = board_row.push(self.render_square(Square::new(display_row, display_col)));
            }

            board_column = board_column.push(board_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: Border {
                    color: styles::BORDER,
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, sq: Square) -> Element<'a, BoardMessage> {
        let size = self.config.square_size;
        let is_light = (sq.row + sq.col) % 2 == 0;
        let mut bg_color = if is_light {
            self.config.light_color()
        } else {
            self.config.dark_color()
        };

        // Highlight last move
        if let Some((from, to)) = self.session.last_move() {
            if sq == from || sq == to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        if self.session.selected_square == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }

        let piece = self.session.game.board().get(sq);
        let is_target = self.session.legal_targets.contains(&sq);

        // King of the side to move while attacked
        if let Some(pc) = piece {
            if pc.kind == PieceKind::King
                && pc.color == self.session.game.side_to_move()
                && self.session.game.in_check()
            {
                bg_color = blend_colors(bg_color, styles::CHECK_OVERLAY);
            }
        }

        let content: Element<'a, BoardMessage> = match piece.and_then(|pc| self.images.view(pc)) {
            Some(img) => {
                if is_target {
                    bg_color = blend_colors(bg_color, styles::TARGET_OVERLAY);
                }
                img
            }
            None if is_target => {
                let dot = size * 0.25;
                container(Space::new(dot, dot))
                    .style(move |_theme| container::Style {
                        background: Some(Background::Color(styles::TARGET_DOT)),
                        border: Border {
                            radius: (dot / 2.0).into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    })
                    .into()
            }
            None => text("").into(),
        };

        button(
            container(content)
                .width(size)
                .height(size)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(size)
        .height(size)
        .padding(0)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.1,
                button::Status::Pressed => 0.2,
                _ => 0.0,
            };
            button::Style {
                background: Some(Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: Border::default(),
                text_color: Color::BLACK,
                ..Default::default()
            }
        })
        .on_press(BoardMessage::SquareClicked(sq))
        .into()
    }
}
