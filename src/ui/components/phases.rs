//! Project phases wizard.
//!
//! Three fixed phases, each an accordion holding a description, the common
//! deliverables, two date fields, a budget field and a capability checklist.
//! Phase snapshots are held individually so an update to one phase leaves the
//! other two shared with the previous wizard state.

use super::badge::create_choice_badge;
use super::form_field::{
    self, DateChild, DateField, DateParams, FieldChild, FieldParams, FieldProps, NumberChild, NumberField,
    NumberParams,
};
use crate::constants::{
    BADGE_FULL_TIME, BADGE_PART_TIME, CAPABILITIES, DEFAULT_DATE_FORMAT, HEADING_COMMON_DELIVERABLES,
    HEADING_DETAILS, HEADING_STARTING_PHASE, HEADING_TEAM_CAPABILITIES, LABEL_PHASE_COMPLETION_DATE,
    LABEL_PHASE_MAX_BUDGET, LABEL_PHASE_START_DATE, PHASE_IMPLEMENTATION_DELIVERABLES,
    PHASE_IMPLEMENTATION_DESCRIPTION, PHASE_IMPLEMENTATION_TITLE, PHASE_INCEPTION_DELIVERABLES,
    PHASE_INCEPTION_DESCRIPTION, PHASE_INCEPTION_TITLE, PHASE_PROOF_OF_CONCEPT_DELIVERABLES,
    PHASE_PROOF_OF_CONCEPT_DESCRIPTION, PHASE_PROOF_OF_CONCEPT_TITLE, PLACEHOLDER_BUDGET, PLACEHOLDER_DATE,
    STARTING_PHASE_PLACEHOLDER, TEAM_CAPABILITIES_HELP,
};
use crate::icons::{Icon, IconService};
use crate::ui::core::{update_component_child, Cmd, Component, Immutable, UpdateReturn};
use crate::utils::color::convert_theme_color;
use crate::utils::text::wrap_words;
use crate::validation::{PhaseErrors, PhaseValues};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub name: String,
    /// Part-time when true, full-time otherwise
    pub pt: bool,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhaseState {
    pub title: String,
    pub description: String,
    pub common_deliverables: Vec<String>,
    pub start_date: Immutable<DateField>,
    pub completion_date: Immutable<DateField>,
    pub max_budget: Immutable<NumberField>,
    pub capabilities: Vec<Capability>,
    pub collapsed: bool,
}

/// Focusable element within a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseItem {
    Header,
    StartDate,
    CompletionDate,
    MaxBudget,
    Capability(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub phase: usize,
    pub item: PhaseItem,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            phase: 0,
            item: PhaseItem::Header,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhasesState {
    pub phases: Vec<Immutable<PhaseState>>,
    pub cursor: Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhasesParams {
    pub date_format: String,
}

impl Default for PhasesParams {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PhasesMsg {
    ToggleCollapsed(usize),
    ToggleCapChecked { phase_index: usize, cap_index: usize },
    SetPtChecked { phase_index: usize, cap_index: usize, value: bool },
    StartDate { phase_index: usize, msg: <DateChild as FieldChild>::Msg },
    CompletionDate { phase_index: usize, msg: <DateChild as FieldChild>::Msg },
    MaxBudget { phase_index: usize, msg: <NumberChild as FieldChild>::Msg },
    FocusNext,
    FocusPrevious,
}

fn init_phase(title: &str, description: &str, deliverables: &[&str], date_format: &str) -> PhaseState {
    let date_field = || {
        Immutable::new(DateField::init(FieldParams {
            errors: Vec::new(),
            child: DateParams {
                format: date_format.to_string(),
                ..DateParams::default()
            },
        }))
    };
    PhaseState {
        title: title.to_string(),
        description: description.to_string(),
        common_deliverables: deliverables.iter().map(|d| d.to_string()).collect(),
        start_date: date_field(),
        completion_date: date_field(),
        max_budget: Immutable::new(NumberField::init(FieldParams {
            errors: Vec::new(),
            child: NumberParams::default(),
        })),
        capabilities: CAPABILITIES
            .iter()
            .map(|name| Capability {
                name: name.to_string(),
                pt: false,
                checked: false,
            })
            .collect(),
        collapsed: false,
    }
}

fn warn_out_of_range(what: &str, index: usize) {
    log::warn!("Phases: ignoring {what} for out-of-range index {index}");
}

/// Apply `f` to one phase, leaving the others shared
fn update_phase(
    state: Immutable<PhasesState>,
    phase_index: usize,
    f: impl FnOnce(&mut PhaseState),
) -> UpdateReturn<PhasesState, PhasesMsg> {
    if phase_index >= state.phases.len() {
        warn_out_of_range("phase update", phase_index);
        return (state, Cmd::none());
    }
    let state = state.update(|phases| {
        if let Some(phase) = phases.phases.get_mut(phase_index) {
            f(Immutable::make_mut(phase));
        }
    });
    (state, Cmd::none())
}

fn update_capability(
    state: Immutable<PhasesState>,
    phase_index: usize,
    cap_index: usize,
    f: impl FnOnce(&mut Capability),
) -> UpdateReturn<PhasesState, PhasesMsg> {
    let in_range = state
        .phases
        .get(phase_index)
        .is_some_and(|phase| cap_index < phase.capabilities.len());
    if !in_range {
        warn_out_of_range("capability update", cap_index);
        return (state, Cmd::none());
    }
    update_phase(state, phase_index, |phase| {
        if let Some(cap) = phase.capabilities.get_mut(cap_index) {
            f(cap);
        }
    })
}

/// Accessors for one field slot of a phase
struct FieldSlot<C> {
    get: fn(&PhaseState) -> &Immutable<C>,
    get_mut: fn(&mut PhaseState) -> &mut Immutable<C>,
}

const START_DATE: FieldSlot<DateField> = FieldSlot {
    get: |phase| &phase.start_date,
    get_mut: |phase| &mut phase.start_date,
};

const COMPLETION_DATE: FieldSlot<DateField> = FieldSlot {
    get: |phase| &phase.completion_date,
    get_mut: |phase| &mut phase.completion_date,
};

const MAX_BUDGET: FieldSlot<NumberField> = FieldSlot {
    get: |phase| &phase.max_budget,
    get_mut: |phase| &mut phase.max_budget,
};

/// Forward a field message to one phase's nested field
fn update_field<C, W>(
    state: Immutable<PhasesState>,
    phase_index: usize,
    msg: C::Msg,
    slot: FieldSlot<C>,
    wrap: W,
) -> UpdateReturn<PhasesState, PhasesMsg>
where
    C: Component,
    W: Fn(usize, C::Msg) -> PhasesMsg + Send + Sync + 'static,
{
    if phase_index >= state.phases.len() {
        warn_out_of_range("field update", phase_index);
        return (state, Cmd::none());
    }
    update_component_child(
        state,
        |phases: &PhasesState| phases.phases.get(phase_index).map(|phase| (slot.get)(phase).clone()),
        |phases: &mut PhasesState, child| {
            if let Some(phase) = phases.phases.get_mut(phase_index) {
                *(slot.get_mut)(Immutable::make_mut(phase)) = child;
            }
        },
        msg,
        move |child_msg| wrap(phase_index, child_msg),
    )
}

/// Every focusable position in display order, skipping collapsed bodies
pub fn focus_targets(state: &PhasesState) -> Vec<Cursor> {
    let mut targets = Vec::new();
    for (phase_index, phase) in state.phases.iter().enumerate() {
        targets.push(Cursor {
            phase: phase_index,
            item: PhaseItem::Header,
        });
        if phase.collapsed {
            continue;
        }
        let items = [PhaseItem::StartDate, PhaseItem::CompletionDate, PhaseItem::MaxBudget]
            .into_iter()
            .chain((0..phase.capabilities.len()).map(PhaseItem::Capability));
        targets.extend(items.map(|item| Cursor {
            phase: phase_index,
            item,
        }));
    }
    targets
}

fn move_focus(state: Immutable<PhasesState>, forward: bool) -> UpdateReturn<PhasesState, PhasesMsg> {
    let targets = focus_targets(&state);
    let next = match targets.iter().position(|cursor| *cursor == state.cursor) {
        Some(i) if forward => targets.get(i + 1).copied(),
        Some(i) => i.checked_sub(1).and_then(|i| targets.get(i).copied()),
        None => targets.first().copied(),
    };
    match next {
        Some(cursor) if cursor != state.cursor => (state.update(|phases| phases.cursor = cursor), Cmd::none()),
        _ => (state, Cmd::none()),
    }
}

impl Component for PhasesState {
    type Params = PhasesParams;
    type Msg = PhasesMsg;

    fn init(params: PhasesParams) -> Self {
        let fixtures = [
            (PHASE_INCEPTION_TITLE, PHASE_INCEPTION_DESCRIPTION, PHASE_INCEPTION_DELIVERABLES),
            (
                PHASE_PROOF_OF_CONCEPT_TITLE,
                PHASE_PROOF_OF_CONCEPT_DESCRIPTION,
                PHASE_PROOF_OF_CONCEPT_DELIVERABLES,
            ),
            (
                PHASE_IMPLEMENTATION_TITLE,
                PHASE_IMPLEMENTATION_DESCRIPTION,
                PHASE_IMPLEMENTATION_DELIVERABLES,
            ),
        ];
        Self {
            phases: fixtures
                .iter()
                .map(|(title, description, deliverables)| {
                    Immutable::new(init_phase(title, description, deliverables, &params.date_format))
                })
                .collect(),
            cursor: Cursor::default(),
        }
    }

    fn update(state: Immutable<Self>, msg: PhasesMsg) -> UpdateReturn<Self, PhasesMsg> {
        match msg {
            PhasesMsg::ToggleCollapsed(phase_index) => {
                let (state, cmd) = update_phase(state, phase_index, |phase| phase.collapsed = !phase.collapsed);
                let collapsed = state.phases.get(phase_index).is_some_and(|phase| phase.collapsed);
                if collapsed && state.cursor.phase == phase_index && state.cursor.item != PhaseItem::Header {
                    return (state.update(|phases| phases.cursor.item = PhaseItem::Header), cmd);
                }
                (state, cmd)
            }
            PhasesMsg::ToggleCapChecked { phase_index, cap_index } => {
                update_capability(state, phase_index, cap_index, |cap| cap.checked = !cap.checked)
            }
            PhasesMsg::SetPtChecked {
                phase_index,
                cap_index,
                value,
            } => update_capability(state, phase_index, cap_index, |cap| cap.pt = value),
            PhasesMsg::StartDate { phase_index, msg } => {
                update_field(state, phase_index, msg, START_DATE, |phase_index, msg| {
                    PhasesMsg::StartDate { phase_index, msg }
                })
            }
            PhasesMsg::CompletionDate { phase_index, msg } => {
                update_field(state, phase_index, msg, COMPLETION_DATE, |phase_index, msg| {
                    PhasesMsg::CompletionDate { phase_index, msg }
                })
            }
            PhasesMsg::MaxBudget { phase_index, msg } => {
                update_field(state, phase_index, msg, MAX_BUDGET, |phase_index, msg| {
                    PhasesMsg::MaxBudget { phase_index, msg }
                })
            }
            PhasesMsg::FocusNext => move_focus(state, true),
            PhasesMsg::FocusPrevious => move_focus(state, false),
        }
    }
}

/// Current field values of one phase, `None` for an out-of-range index
pub fn get_values(state: &PhasesState, phase_index: usize) -> Option<PhaseValues> {
    state.phases.get(phase_index).map(|phase| PhaseValues {
        start_date: form_field::get_value(&phase.start_date),
        completion_date: form_field::get_value(&phase.completion_date),
        max_budget: form_field::get_value(&phase.max_budget),
    })
}

/// Show validation messages on the three fields of one phase
pub fn set_errors(state: Immutable<PhasesState>, phase_index: usize, errors: PhaseErrors) -> Immutable<PhasesState> {
    if phase_index >= state.phases.len() {
        warn_out_of_range("set_errors", phase_index);
        return state;
    }
    state.update(|phases| {
        if let Some(phase) = phases.phases.get_mut(phase_index) {
            let phase = Immutable::make_mut(phase);
            phase.start_date = form_field::set_errors(phase.start_date.clone(), errors.start_date);
            phase.completion_date = form_field::set_errors(phase.completion_date.clone(), errors.completion_date);
            phase.max_budget = form_field::set_errors(phase.max_budget.clone(), errors.max_budget);
        }
    })
}

pub fn handle_key(state: &PhasesState, key: &KeyEvent) -> Option<PhasesMsg> {
    let Cursor { phase: phase_index, item } = state.cursor;
    let field_msg = match item {
        PhaseItem::StartDate => {
            DateChild::key_to_msg(key).map(|msg| PhasesMsg::StartDate { phase_index, msg })
        }
        PhaseItem::CompletionDate => {
            DateChild::key_to_msg(key).map(|msg| PhasesMsg::CompletionDate { phase_index, msg })
        }
        PhaseItem::MaxBudget => NumberChild::key_to_msg(key).map(|msg| PhasesMsg::MaxBudget { phase_index, msg }),
        PhaseItem::Header | PhaseItem::Capability(_) => None,
    };
    if field_msg.is_some() {
        return field_msg;
    }

    match (key.code, item) {
        (KeyCode::Down, _) => Some(PhasesMsg::FocusNext),
        (KeyCode::Up, _) => Some(PhasesMsg::FocusPrevious),
        (KeyCode::Enter | KeyCode::Char(' '), PhaseItem::Header) => Some(PhasesMsg::ToggleCollapsed(phase_index)),
        (KeyCode::Enter | KeyCode::Char(' '), PhaseItem::Capability(cap_index)) => {
            Some(PhasesMsg::ToggleCapChecked { phase_index, cap_index })
        }
        (KeyCode::Char(c @ ('p' | 'f')), PhaseItem::Capability(cap_index)) => {
            let checked = state
                .phases
                .get(phase_index)
                .and_then(|phase| phase.capabilities.get(cap_index))
                .is_some_and(|cap| cap.checked);
            checked.then_some(PhasesMsg::SetPtChecked {
                phase_index,
                cap_index,
                value: c == 'p',
            })
        }
        _ => None,
    }
}

/// Display settings for the wizard
pub struct PhasesViewProps<'a> {
    pub icons: &'a IconService,
    pub currency_prefix: &'a str,
    pub width: u16,
}

fn date_placeholder(format: &str) -> &str {
    if format == DEFAULT_DATE_FORMAT {
        PLACEHOLDER_DATE
    } else {
        format
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn indent(mut line: Line<'static>, by: &'static str) -> Line<'static> {
    line.spans.insert(0, Span::raw(by));
    line
}

/// Lines of the whole wizard and the index of the line holding the cursor
pub fn view_lines(state: &PhasesState, props: &PhasesViewProps<'_>) -> (Vec<Line<'static>>, usize) {
    let text_width = usize::from(props.width.saturating_sub(4));
    let mut lines = vec![
        Line::from(Span::styled(
            HEADING_STARTING_PHASE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            STARTING_PHASE_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];
    let mut focused_line = 0;

    for (phase_index, phase) in state.phases.iter().enumerate() {
        let is_focused = |item: PhaseItem| state.cursor == Cursor { phase: phase_index, item };

        let marker = if phase.collapsed { Icon::Plus } else { Icon::Times };
        let header_focused = is_focused(PhaseItem::Header);
        if header_focused {
            focused_line = lines.len();
        }
        let mut title_style = Style::default()
            .fg(convert_theme_color("blue-dark"))
            .add_modifier(Modifier::BOLD);
        if header_focused {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(vec![
            Span::raw(if header_focused { "> " } else { "  " }),
            props.icons.render(marker, Some(convert_theme_color("primary"))),
            Span::raw(" "),
            Span::styled(phase.title.clone(), title_style),
        ]));

        if phase.collapsed {
            lines.push(Line::default());
            continue;
        }

        lines.extend(
            wrap_words(&phase.description, text_width)
                .into_iter()
                .map(|line| Line::from(format!("  {line}"))),
        );
        lines.push(Line::default());

        lines.push(heading(HEADING_COMMON_DELIVERABLES));
        for deliverable in &phase.common_deliverables {
            lines.push(Line::from(vec![
                Span::raw("   "),
                props.icons.render(Icon::Check, Some(convert_theme_color("success"))),
                Span::raw(format!(" {deliverable}")),
            ]));
        }
        lines.push(Line::default());

        lines.push(heading(HEADING_DETAILS));
        let date_fields = [
            (PhaseItem::StartDate, &phase.start_date, LABEL_PHASE_START_DATE, true),
            (
                PhaseItem::CompletionDate,
                &phase.completion_date,
                LABEL_PHASE_COMPLETION_DATE,
                false,
            ),
        ];
        for (item, field, label, required) in date_fields {
            if is_focused(item) {
                focused_line = lines.len() + 1;
            }
            let props = FieldProps {
                label,
                required,
                placeholder: date_placeholder(&field.child.format),
                focused: is_focused(item),
                ..FieldProps::default()
            };
            lines.extend(
                form_field::view_lines(field, &props)
                    .into_iter()
                    .map(|line| indent(line, "  ")),
            );
        }
        if is_focused(PhaseItem::MaxBudget) {
            focused_line = lines.len() + 1;
        }
        let budget_props = FieldProps {
            label: LABEL_PHASE_MAX_BUDGET,
            required: true,
            placeholder: PLACEHOLDER_BUDGET,
            prefix: Some(props.currency_prefix),
            focused: is_focused(PhaseItem::MaxBudget),
            ..FieldProps::default()
        };
        lines.extend(
            form_field::view_lines(&phase.max_budget, &budget_props)
                .into_iter()
                .map(|line| indent(line, "  ")),
        );
        lines.push(Line::default());

        lines.push(heading(HEADING_TEAM_CAPABILITIES));
        lines.extend(
            wrap_words(TEAM_CAPABILITIES_HELP, text_width)
                .into_iter()
                .map(|line| Line::from(Span::styled(format!("  {line}"), Style::default().fg(Color::Gray)))),
        );
        for (cap_index, cap) in phase.capabilities.iter().enumerate() {
            let focused = is_focused(PhaseItem::Capability(cap_index));
            if focused {
                focused_line = lines.len();
            }
            let checkbox = if cap.checked {
                Span::styled(
                    format!("[{}]", props.icons.glyph(Icon::Check)),
                    Style::default().fg(convert_theme_color("success")),
                )
            } else {
                Span::raw("[ ]")
            };
            let name_style = if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let mut spans = vec![
                Span::styled(if focused { " > " } else { "   " }, Style::default().fg(Color::Cyan)),
                checkbox,
                Span::raw(" "),
                Span::styled(cap.name.clone(), name_style),
            ];
            if cap.checked {
                spans.push(Span::raw("  "));
                spans.push(create_choice_badge(BADGE_PART_TIME, cap.pt));
                spans.push(Span::raw(" "));
                spans.push(create_choice_badge(BADGE_FULL_TIME, !cap.pt));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }

    (lines, focused_line)
}

/// Render the wizard, scrolled so the cursor stays visible
pub fn view(f: &mut Frame, area: Rect, state: &PhasesState, props: &PhasesViewProps<'_>) {
    let (lines, focused_line) = view_lines(state, props);
    let visible = usize::from(area.height.max(1));
    let scroll = (focused_line + 2).saturating_sub(visible);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}
