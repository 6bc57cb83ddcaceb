use super::messages::Message;
use super::state::{App, DISCLAIMER, OUTPUT_PLACEHOLDER, PROCESSING_HINT, RULER_OPACITY};
use crate::markup::styled_runs;
use crate::settings::{
    ColorTheme, FontFamily, LETTER_SPACING_STEP, LINE_HEIGHT_STEP, MAX_FONT_SIZE,
    MAX_LETTER_SPACING, MAX_LINE_HEIGHT, MAX_WORD_SPACING, MIN_FONT_SIZE, MIN_LETTER_SPACING,
    MIN_LINE_HEIGHT, MIN_WORD_SPACING, WORD_SPACING_STEP,
};
use crate::theme::{ThemeColors, colors};
use iced::alignment::Vertical;
use iced::widget::text::{LineHeight, Rich, Span, Wrapping};
use iced::widget::{
    Column, Space, button, checkbox, column, container, mouse_area, pick_list, row, scrollable,
    slider, stack, text, text_editor,
};
use iced::{Border, Color, Element, Length, Theme};

const PANEL_WIDTH: f32 = 320.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = colors(self.settings.theme);
        row![self.settings_panel(palette), self.reading_area(palette)]
            .spacing(16)
            .padding(16)
            .height(Length::Fill)
            .into()
    }

    fn settings_panel(&self, palette: ThemeColors) -> Element<'_, Message> {
        let processing = self.pipeline.is_processing();
        let settings = &self.settings;

        let font_picker = column![
            text("Font"),
            pick_list(
                &FontFamily::ALL[..],
                Some(settings.font_family),
                Message::FontFamilyChanged,
            )
            .width(Length::Fill),
        ]
        .spacing(4);

        let sliders = column![
            labeled_slider(
                format!("Font size: {}px", settings.font_size),
                slider(
                    MIN_FONT_SIZE as f32..=MAX_FONT_SIZE as f32,
                    settings.font_size as f32,
                    |value| Message::FontSizeChanged(value.round() as u32),
                )
                .step(1.0),
            ),
            labeled_slider(
                format!("Letter spacing: {:.1}px", settings.letter_spacing),
                slider(
                    MIN_LETTER_SPACING..=MAX_LETTER_SPACING,
                    settings.letter_spacing,
                    Message::LetterSpacingChanged,
                )
                .step(LETTER_SPACING_STEP),
            ),
            labeled_slider(
                format!("Word spacing: {:.0}px", settings.word_spacing),
                slider(
                    MIN_WORD_SPACING..=MAX_WORD_SPACING,
                    settings.word_spacing,
                    Message::WordSpacingChanged,
                )
                .step(WORD_SPACING_STEP),
            ),
            labeled_slider(
                format!("Line height: {:.1}", settings.line_height),
                slider(
                    MIN_LINE_HEIGHT..=MAX_LINE_HEIGHT,
                    settings.line_height,
                    Message::LineHeightChanged,
                )
                .step(LINE_HEIGHT_STEP),
            ),
        ]
        .spacing(10);

        let theme_buttons = ColorTheme::ALL.iter().fold(row![].spacing(6), |row, theme| {
            let style: fn(&Theme, button::Status) -> button::Style = if *theme == settings.theme {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                button(text(theme.to_string()))
                    .on_press(Message::ThemeSelected(*theme))
                    .style(style),
            )
        });

        let mut aids = column![
            checkbox("Bionic Emphasis", settings.emphasis).on_toggle(Message::ToggleEmphasis),
            checkbox("Syllable Separation", settings.syllables)
                .on_toggle_maybe((!processing).then_some(Message::ToggleSyllables)),
            checkbox("Reading Ruler", self.show_ruler).on_toggle(Message::ToggleRuler),
        ]
        .spacing(8);
        if processing {
            aids = aids.push(text(PROCESSING_HINT).size(13).color(palette.primary));
        }

        let read_button = if self.reading {
            button("Stop Reading").on_press(Message::StopReading)
        } else {
            button("Read Aloud").on_press_maybe((!processing).then_some(Message::ReadAloud))
        };

        let mut panel: Column<'_, Message> = column![
            text("Reading Aid").size(24),
            font_picker,
            sliders,
            column![text("Theme"), theme_buttons].spacing(4),
            aids,
            read_button.width(Length::Fill),
        ]
        .spacing(18);

        if let Some(notice) = &self.notice {
            panel = panel.push(
                row![
                    text(notice.as_str()).size(13).width(Length::Fill),
                    button("Dismiss")
                        .on_press(Message::DismissNotice)
                        .style(button::danger),
                ]
                .spacing(8)
                .align_y(Vertical::Center),
            );
        }
        panel = panel.push(text(DISCLAIMER).size(11));

        container(scrollable(panel))
            .width(Length::Fixed(PANEL_WIDTH))
            .height(Length::Fill)
            .padding(16)
            .style(move |_theme| card_style(palette))
            .into()
    }

    fn reading_area(&self, palette: ThemeColors) -> Element<'_, Message> {
        let input = text_editor(&self.editor)
            .on_action(Message::EditorAction)
            .height(Length::FillPortion(1))
            .padding(12);

        let card = container(scrollable(self.rendered_output(palette)).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .style(move |_theme| card_style(palette));

        let pane: Element<'_, Message> = if self.show_ruler {
            stack![card, self.ruler_overlay(palette)].into()
        } else {
            card.into()
        };
        let output = container(mouse_area(pane).on_move(Message::RulerMoved))
            .width(Length::Fill)
            .height(Length::FillPortion(2));

        column![input, output]
            .spacing(16)
            .width(Length::Fill)
            .into()
    }

    fn ruler_overlay(&self, palette: ThemeColors) -> Element<'_, Message> {
        let (top, height) = self.ruler_band();
        let band = container(Space::new(Length::Fill, Length::Fixed(height)))
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(
                    Color {
                        a: RULER_OPACITY,
                        ..palette.primary
                    }
                    .into(),
                ),
                border: Border {
                    radius: 4.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });
        column![Space::with_height(Length::Fixed(top)), band]
            .width(Length::Fill)
            .into()
    }

    fn rendered_output(&self, palette: ThemeColors) -> Element<'_, Message> {
        let size = self.settings.font_size as f32;
        let line_height = LineHeight::Relative(self.settings.line_height);

        if self.annotated.trim().is_empty() {
            return text(OUTPUT_PLACEHOLDER)
                .size(size)
                .line_height(line_height)
                .font(self.current_font())
                .color(palette.muted_text())
                .into();
        }

        let spans: Vec<Span<'_, Message>> = styled_runs(&self.annotated)
            .into_iter()
            .map(|run| {
                let font = if run.bold {
                    self.emphasis_font()
                } else {
                    self.current_font()
                };
                Span::new(self.spaced_run(&run.text))
                    .font(font)
                    .size(size)
                    .line_height(line_height)
                    .color(palette.text)
            })
            .collect();

        let rich: Rich<'_, Message> = Rich::with_spans(spans);
        rich.width(Length::Fill)
            .wrapping(Wrapping::WordOrGlyph)
            .into()
    }
}

fn labeled_slider<'a>(
    label: String,
    slider: iced::widget::Slider<'a, f32, Message>,
) -> Element<'a, Message> {
    column![text(label).size(14), slider].spacing(4).into()
}

fn card_style(palette: ThemeColors) -> container::Style {
    container::Style {
        background: Some(palette.card.into()),
        text_color: Some(palette.text),
        border: Border {
            color: palette.secondary,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
