use crate::constants::{TITLE_DESCRIBE_PROJECT, TOAST_PHASE_INVALID, TOAST_PHASE_VALID};
use crate::ui::components::phases::{self, PhasesMsg, PhasesParams, PhasesState, PhasesViewProps};
use crate::ui::core::{
    update_component_child, AppContext, Cmd, Component, GlobalMsg, Immutable, PageComponent, PageMetadata,
    SharedState, ToastContent, UpdateReturn,
};
use crate::validation::validate_phase;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DescribeProjectState {
    pub phases: Immutable<PhasesState>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DescribeProjectMsg {
    Phases(PhasesMsg),
    /// Check the phase under the cursor and show its errors
    Validate,
}

impl PageComponent for DescribeProjectState {
    type Msg = DescribeProjectMsg;

    fn init(_shared: &SharedState, ctx: &AppContext) -> Self {
        Self {
            phases: Immutable::new(PhasesState::init(PhasesParams {
                date_format: ctx.config.display.date_format.clone(),
            })),
        }
    }

    fn update(
        state: Immutable<Self>,
        msg: DescribeProjectMsg,
    ) -> UpdateReturn<Self, GlobalMsg<DescribeProjectMsg>> {
        match msg {
            DescribeProjectMsg::Phases(msg) => update_component_child(
                state,
                |page: &Self| Some(page.phases.clone()),
                |page: &mut Self, phases| page.phases = phases,
                msg,
                |msg| GlobalMsg::Local(DescribeProjectMsg::Phases(msg)),
            ),
            DescribeProjectMsg::Validate => {
                let phase_index = state.phases.cursor.phase;
                let Some(values) = phases::get_values(&state.phases, phase_index) else {
                    return (state, Cmd::none());
                };
                let errors = validate_phase(&values);
                let title = state
                    .phases
                    .phases
                    .get(phase_index)
                    .map(|phase| phase.title.clone())
                    .unwrap_or_default();
                let toast = if errors.is_empty() {
                    ToastContent::success(title, TOAST_PHASE_VALID)
                } else {
                    ToastContent::error(title, TOAST_PHASE_INVALID)
                };
                log::info!("Validated phase {phase_index}: {} errors", errors.count());
                let state = state.update(|page| {
                    page.phases = phases::set_errors(page.phases.clone(), phase_index, errors);
                });
                (state, Cmd::msg(GlobalMsg::Toast(toast)))
            }
        }
    }

    fn view(state: &Self, f: &mut Frame, area: Rect, ctx: &AppContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {TITLE_DESCRIBE_PROJECT} "));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let props = PhasesViewProps {
            icons: &ctx.icons,
            currency_prefix: &ctx.config.display.currency_prefix,
            width: inner.width,
        };
        phases::view(f, inner, &state.phases, &props);
    }

    fn handle_key(state: &Self, key: &KeyEvent, _ctx: &AppContext) -> Option<DescribeProjectMsg> {
        if let Some(msg) = phases::handle_key(&state.phases, key) {
            return Some(DescribeProjectMsg::Phases(msg));
        }
        match key.code {
            KeyCode::Char('v') => Some(DescribeProjectMsg::Validate),
            _ => None,
        }
    }

    fn metadata(_state: &Self) -> PageMetadata {
        PageMetadata::new(TITLE_DESCRIBE_PROJECT).with_hints("↑/↓: move • Space: toggle • p/f: P/T F/T • v: validate")
    }
}
