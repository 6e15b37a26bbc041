//! Main application state and logic

use crate::assets::PieceImages;
use crate::board::{BoardMessage, BoardView};
use crate::config::DisplayConfig;
use crate::game::PlaySession;
use crate::styles::{PADDING, PANEL_WIDTH};

use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, vertical_space};
use iced::{Element, Length, Task, Theme};
use tracing::info;

/// Main application state
pub struct ChessApp {
    session: PlaySession,
    /// Board flipped?
    board_flipped: bool,
    images: PieceImages,
    config: DisplayConfig,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    NewGame,
    Undo,
    FlipBoard,
}

impl ChessApp {
    pub fn new(config: DisplayConfig, images: PieceImages) -> (Self, Task<Message>) {
        (
            Self {
                session: PlaySession::new(),
                board_flipped: false,
                images,
                config,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        self.config.window_title.clone()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::SquareClicked(sq)) => {
                self.session.select_square(sq);
            }
            Message::NewGame => {
                info!("new game");
                self.session.reset();
            }
            Message::Undo => {
                if let Some(mv) = self.session.undo() {
                    info!(%mv, "move taken back");
                }
            }
            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.session, &self.images, &self.config, self.board_flipped)
            .view()
            .map(Message::Board);

        row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(PADDING)
        .padding(PADDING)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let undo_btn = button(text("Undo"))
            .on_press_maybe(self.session.can_undo().then_some(Message::Undo))
            .style(button::secondary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        // Move history
        let mut moves_list = column![].spacing(2);
        for line in self.session.move_lines() {
            moves_list = moves_list.push(text(line).size(13));
        }

        column![
            new_game_btn,
            undo_btn,
            flip_btn,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text(self.session.status()).size(16),
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text("Moves").size(16),
            scrollable(moves_list).height(Length::Fill),
        ]
        .spacing(5)
        .into()
    }
}
