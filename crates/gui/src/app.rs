//! Main application state and logic.
//!
//! The application owns the one engine session and the board surface and
//! routes every gesture through the move dispatcher. The computer-move
//! loop lives here as a generation-counted task: each ply is deferred
//! through a short timer so the UI stays responsive between plies, and a
//! reset or position load bumps the generation so ticks scheduled before
//! it are dropped instead of applying stale moves.

use std::time::Duration;

use board_core::codec::START_POSITION_FEN;
use engine_session::{GameSession, PlayerKind, Promotion};
use iced::widget::{
    button, center, column, container, horizontal_rule, opaque, pick_list, row, stack, text,
    text_input, vertical_space,
};
use iced::{Color, Element, Length, Subscription, Task, Theme};
use tracing::{debug, warn};

use crate::board_view::{BoardCanvas, BoardMessage};
use crate::dispatch::{self, TurnStatus};
use crate::input::{InputController, MoveIntent};
use crate::notice::GameOverNotice;
use crate::promotion::{PromotionChoice, PromotionPrompt};
use crate::settings::Settings;
use crate::styles::PANEL_WIDTH;
use crate::surface::BoardSurface;

/// Pause between computer plies. Long enough to watch a computer-vs-
/// computer game, short enough not to drag.
const COMPUTER_PLY_DELAY: Duration = Duration::from_millis(150);

/// Main application state
pub struct App {
    session: GameSession,
    surface: BoardSurface,
    input: InputController,
    promotion: PromotionPrompt,
    notice: GameOverNotice,
    settings: Settings,
    position_input: String,
    /// Bumped on every reset/position load; stale computer plies carry an
    /// older value and are dropped.
    generation: u64,
    computer_thinking: bool,
    game_over: bool,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Promotion prompt
    PromotionPicked(PromotionChoice),
    PromotionSubmitted,

    // Computer-move loop
    ComputerPly(u64),

    // Game controls
    NewGame,
    FlipBoard,
    WhitePlayerChanged(PlayerKind),
    BlackPlayerChanged(PlayerKind),
    PositionInputChanged(String),
    LoadPosition,
    DismissNotice,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let mut session = GameSession::new();
        session.set_players(settings.white_player, settings.black_player);
        session.set_search_depth(settings.search_depth);

        let mut surface = BoardSurface::new();
        dispatch::refresh(&mut surface, &session);

        let mut app = Self {
            session,
            surface,
            input: InputController::new(),
            promotion: PromotionPrompt::new(),
            notice: GameOverNotice::new(),
            settings,
            position_input: START_POSITION_FEN.to_string(),
            generation: 0,
            computer_thinking: false,
            game_over: false,
        };
        let task = app.resume_computer_play();
        (app, task)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::DragStarted(square)) => {
                if self.human_input_allowed() {
                    self.input.drag_started(&self.surface, square);
                }
                Task::none()
            }

            // Only forces a redraw so the lifted piece tracks the cursor.
            Message::Board(BoardMessage::DragMoved) => Task::none(),

            Message::Board(BoardMessage::DragAborted) => {
                self.input.drag_aborted();
                Task::none()
            }

            Message::Board(BoardMessage::Dropped(square)) => {
                if !self.human_input_allowed() {
                    self.input.drag_aborted();
                    return Task::none();
                }
                match self.input.dropped(&self.surface, square) {
                    Some(intent) => self.handle_intent(intent),
                    None => Task::none(),
                }
            }

            Message::PromotionPicked(choice) => {
                self.promotion.select(choice);
                Task::none()
            }

            Message::PromotionSubmitted => match self.promotion.take_submission() {
                Some((from, to, code)) => self.attempt(from, to, Promotion::from_code(code)),
                None => Task::none(),
            },

            Message::ComputerPly(generation) => {
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "dropping computer ply from before a reset"
                    );
                    return Task::none();
                }
                self.computer_thinking = false;
                let status = dispatch::computer_ply(&mut self.session, &mut self.surface);
                self.after_move(status)
            }

            Message::NewGame => {
                self.position_input = START_POSITION_FEN.to_string();
                self.restart(None)
            }

            Message::LoadPosition => {
                let fen = self.position_input.clone();
                self.restart(Some(fen))
            }

            Message::PositionInputChanged(value) => {
                self.position_input = value;
                Task::none()
            }

            Message::WhitePlayerChanged(kind) => {
                self.settings.white_player = kind;
                self.apply_players()
            }

            Message::BlackPlayerChanged(kind) => {
                self.settings.black_player = kind;
                self.apply_players()
            }

            Message::FlipBoard => {
                self.settings.flipped = !self.settings.flipped;
                self.settings.save();
                Task::none()
            }

            Message::DismissNotice => {
                self.notice.close();
                Task::none()
            }
        }
    }

    /// Drops land only on a live human turn: no open prompt or popup, no
    /// pending computer ply, game not over.
    fn human_input_allowed(&self) -> bool {
        !self.computer_thinking
            && !self.promotion.is_open()
            && !self.notice.is_open()
            && !self.game_over
            && !self.session.is_computer_move()
    }

    /// A resolved drop goes through the promotion check first; everything
    /// else reaches the dispatcher with "no promotion".
    fn handle_intent(&mut self, intent: MoveIntent) -> Task<Message> {
        if self.promotion.intercept(&self.surface, intent) {
            return Task::none();
        }
        self.attempt(intent.from, intent.to, Promotion::None)
    }

    fn attempt(
        &mut self,
        from: board_core::Square,
        to: board_core::Square,
        promotion: Promotion,
    ) -> Task<Message> {
        match dispatch::attempt_move(&mut self.session, &mut self.surface, from, to, promotion) {
            Some(status) => self.after_move(status),
            None => Task::none(),
        }
    }

    fn after_move(&mut self, status: TurnStatus) -> Task<Message> {
        match status {
            TurnStatus::GameOver(message) => {
                self.game_over = true;
                self.computer_thinking = false;
                self.notice.open(message);
                Task::none()
            }
            TurnStatus::ComputerTurn => self.schedule_computer_ply(),
            TurnStatus::HumanTurn => {
                self.computer_thinking = false;
                Task::none()
            }
        }
    }

    /// One deferred tick of the computer-move loop.
    fn schedule_computer_ply(&mut self) -> Task<Message> {
        self.computer_thinking = true;
        let generation = self.generation;
        Task::perform(tokio::time::sleep(COMPUTER_PLY_DELAY), move |_| {
            Message::ComputerPly(generation)
        })
    }

    /// Starts the loop when the side to move is computer-controlled and no
    /// ply is already pending.
    fn resume_computer_play(&mut self) -> Task<Message> {
        if !self.computer_thinking
            && !self.game_over
            && !self.promotion.is_open()
            && self.session.is_computer_move()
        {
            self.schedule_computer_ply()
        } else {
            Task::none()
        }
    }

    /// Reset-then-reapply flow shared by New Game and Load Position: the
    /// session reset restores human/human control, so the configured side
    /// control is reapplied afterwards, never before.
    fn restart(&mut self, fen: Option<String>) -> Task<Message> {
        self.generation += 1;
        self.computer_thinking = false;
        self.game_over = false;
        self.input.drag_aborted();
        self.promotion.cancel();
        self.notice.close();

        self.session.reset_board();
        if let Some(fen) = fen {
            if let Err(err) = self.session.set_board(&fen) {
                warn!(%err, "could not load the requested position, keeping the start position");
            }
        }
        self.session
            .set_players(self.settings.white_player, self.settings.black_player);

        dispatch::refresh(&mut self.surface, &self.session);
        self.resume_computer_play()
    }

    fn apply_players(&mut self) -> Task<Message> {
        self.session
            .set_players(self.settings.white_player, self.settings.black_player);
        self.settings.save();
        if self.game_over {
            return Task::none();
        }
        self.resume_computer_play()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardCanvas::new(
            &self.surface,
            self.input.drag_source(&self.surface),
            self.session.last_move(),
            self.settings.flipped,
        )
        .view()
        .map(Message::Board);

        let content: Element<'_, Message> = row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into();

        let content: Element<'_, Message> = if self.promotion.is_open() {
            stack![content, modal_backdrop(self.promotion_card())].into()
        } else {
            content
        };

        if let Some(message) = self.notice.message() {
            stack![content, modal_backdrop(self.notice_card(message))].into()
        } else {
            content
        }
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let player_types = [PlayerKind::Human, PlayerKind::Computer];

        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        let white_picker = pick_list(
            player_types,
            Some(self.settings.white_player),
            Message::WhitePlayerChanged,
        )
        .width(Length::Fill);

        let black_picker = pick_list(
            player_types,
            Some(self.settings.black_player),
            Message::BlackPlayerChanged,
        )
        .width(Length::Fill);

        let position_input = text_input("FEN position", &self.position_input)
            .on_input(Message::PositionInputChanged)
            .on_submit(Message::LoadPosition)
            .size(13);
        let load_btn = button(text("Load"))
            .on_press(Message::LoadPosition)
            .style(button::secondary);

        let status = if let Some(message) = self.notice.message() {
            message.to_string()
        } else if self.game_over {
            "Game over".to_string()
        } else if self.computer_thinking {
            "Computer thinking...".to_string()
        } else {
            let side = match self.session.side_to_move() {
                board_core::Color::White => "White",
                board_core::Color::Black => "Black",
            };
            format!("{side} to move")
        };

        column![
            new_game_btn,
            flip_btn,
            vertical_space().height(20),
            text("White Player").size(14),
            white_picker,
            vertical_space().height(10),
            text("Black Player").size(14),
            black_picker,
            vertical_space().height(20),
            text("Position").size(14),
            row![position_input, load_btn].spacing(5),
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text(status).size(16),
        ]
        .spacing(5)
        .into()
    }

    /// The promotion prompt: a fixed select control plus a submit control.
    fn promotion_card(&self) -> Element<'_, Message> {
        let picker = pick_list(
            PromotionChoice::ALL,
            self.promotion.selected(),
            Message::PromotionPicked,
        )
        .placeholder("Choose a piece")
        .width(Length::Fill);

        container(
            column![
                text("Pawn promotion").size(20),
                picker,
                button(text("Promote"))
                    .on_press(Message::PromotionSubmitted)
                    .style(button::primary)
                    .width(Length::Fill),
            ]
            .spacing(12)
            .width(220),
        )
        .padding(20)
        .style(container::rounded_box)
        .into()
    }

    fn notice_card(&self, message: &str) -> Element<'_, Message> {
        container(
            column![
                text(message.to_string()).size(24),
                button(text("New Game"))
                    .on_press(Message::NewGame)
                    .style(button::primary)
                    .width(Length::Fill),
                button(text("Close"))
                    .on_press(Message::DismissNotice)
                    .style(button::secondary)
                    .width(Length::Fill),
            ]
            .spacing(12)
            .width(220),
        )
        .padding(20)
        .style(container::rounded_box)
        .into()
    }
}

/// Dims the content underneath a modal card and blocks input to it.
fn modal_backdrop(card: Element<'_, Message>) -> Element<'_, Message> {
    opaque(center(card).style(|_theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
        ..Default::default()
    }))
}
