use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use marketplace::config::Config;
use marketplace::logger::LogBuffer;
use marketplace::ui::app::{self, AppMsg, AppState, PageState};
use marketplace::ui::components::{ModalMsg, NavMsg, PhasesMsg};
use marketplace::ui::core::{AppContext, GlobalMsg, Immutable, Route, ToastContent, ToastLevel};
use marketplace::ui::pages::DescribeProjectMsg;
use marketplace::users::InMemoryUserDirectory;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

fn ctx() -> AppContext {
    AppContext::default()
}

/// Run a message and every follow-up message its command produces right
/// away. Delayed messages such as toast dismissals are left out.
async fn settle(state: Immutable<AppState>, msg: AppMsg, ctx: &AppContext) -> Immutable<AppState> {
    let mut queue = vec![msg];
    let mut state = state;
    while let Some(msg) = queue.pop() {
        let (next, cmd) = app::update(state, msg, ctx);
        state = next;
        for future in cmd.into_futures() {
            if let Ok(msg) = tokio::time::timeout(Duration::from_millis(20), future).await {
                queue.push(msg);
            }
        }
    }
    state
}

async fn started(ctx: &AppContext) -> Immutable<AppState> {
    let (state, cmd) = app::init(ctx);
    let mut state = state;
    for msg in cmd.collect().await {
        state = settle(state, msg, ctx).await;
    }
    state
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

#[tokio::test]
async fn test_init_state() {
    let ctx = ctx();
    let (state, cmd) = app::init(&ctx);
    assert!(!state.ready);
    assert_eq!(state.transition_loading, 0);
    assert!(state.toasts.is_empty());
    assert!(!state.modal.open);
    assert!(state.modal.content.title.is_empty());
    assert!(state.modal.content.body.is_empty());
    assert!(state.modal.content.actions.is_empty());
    assert_eq!(*state.modal.content.on_close_msg, AppMsg::Noop);
    assert_eq!(state.shared.session, None);
    assert_eq!(state.active_route, Route::Landing);
    assert_eq!(state.nav.active_link, Route::Landing);
    assert!(state.page.is_none());
    assert_eq!(cmd.collect().await, vec![AppMsg::NewRoute(Route::Landing)]);
}

#[tokio::test]
async fn test_landing_route_is_configurable() {
    let mut config = Config::default();
    config.ui.landing_route = Route::UserList;
    let ctx = AppContext::new(config, Arc::new(InMemoryUserDirectory::sample()), LogBuffer::new(0));
    let state = started(&ctx).await;
    assert_eq!(state.active_route, Route::UserList);
    assert!(matches!(state.page, Some(PageState::UserList(_))));
}

#[tokio::test]
async fn test_route_change_replaces_page() {
    let ctx = ctx();
    let state = started(&ctx).await;
    assert!(state.ready);
    assert_eq!(state.transition_loading, 0);
    assert!(matches!(state.page, Some(PageState::Landing(_))));

    let (loading, cmd) = app::update(state, AppMsg::NewRoute(Route::DescribeProject), &ctx);
    assert_eq!(loading.transition_loading, 1);
    assert_eq!(loading.active_route, Route::Landing);
    assert_eq!(cmd.collect().await, vec![AppMsg::PageReady(Route::DescribeProject)]);

    let state = settle(loading, AppMsg::PageReady(Route::DescribeProject), &ctx).await;
    assert_eq!(state.transition_loading, 0);
    assert_eq!(state.active_route, Route::DescribeProject);
    assert_eq!(state.nav.active_link, Route::DescribeProject);
    assert_eq!(state.page.as_ref().map(PageState::route), Some(Route::DescribeProject));
}

#[tokio::test]
async fn test_nav_keys_navigate() {
    let ctx = ctx();
    let state = started(&ctx).await;

    let msg = app::handle_key(&state, &key(KeyCode::Char('2')), &ctx);
    assert_eq!(msg, Some(AppMsg::Nav(GlobalMsg::Local(NavMsg::Select(1)))));

    let state = settle(state, AppMsg::Nav(GlobalMsg::Local(NavMsg::Next)), &ctx).await;
    assert_eq!(state.active_route, Route::UserList);
    assert!(matches!(state.page, Some(PageState::UserList(_))));
}

#[tokio::test]
async fn test_messages_for_inactive_page_are_dropped() {
    let ctx = ctx();
    let state = started(&ctx).await;
    let msg = AppMsg::DescribeProject(GlobalMsg::Local(DescribeProjectMsg::Phases(PhasesMsg::FocusNext)));
    let (after, cmd) = app::update(state.clone(), msg, &ctx);
    assert!(cmd.is_none());
    assert!(Immutable::ptr_eq(&state, &after));
}

#[tokio::test(start_paused = true)]
async fn test_toasts_are_capped_and_dismissed() {
    let ctx = ctx();
    let (mut state, _) = app::init(&ctx);
    let mut dismissals = Vec::new();
    for i in 0..6 {
        let (next, cmd) = app::update(state, AppMsg::ShowToast(ToastContent::info("Note", format!("{i}"))), &ctx);
        state = next;
        dismissals.push(cmd);
    }
    assert_eq!(state.toasts.len(), 4);
    assert_eq!(state.toasts[0].content.body, "2");

    let msgs = dismissals.pop().expect("one command per toast").collect().await;
    assert_eq!(msgs, vec![AppMsg::DismissToast(state.toasts[3].id)]);

    let (state, _) = app::update(state, msgs[0].clone(), &ctx);
    assert_eq!(state.toasts.len(), 3);
    assert!(state.toasts.iter().all(|toast| toast.content.body != "5"));
}

#[tokio::test]
async fn test_quit_confirmation_flow() {
    let ctx = ctx();
    let state = started(&ctx).await;

    let msg = app::handle_key(&state, &key(KeyCode::Char('q')), &ctx);
    assert_eq!(msg, Some(AppMsg::RequestQuit));
    let state = settle(state, AppMsg::RequestQuit, &ctx).await;
    assert!(state.modal.open);
    assert_eq!(state.modal.content.actions.len(), 2);

    // Page and global keys are ignored while the modal is open
    assert_eq!(
        app::handle_key(&state, &key(KeyCode::Char('G')), &ctx),
        None
    );

    let cancelled = settle(state.clone(), AppMsg::Modal(ModalMsg::Close), &ctx).await;
    assert!(!cancelled.modal.open);
    assert!(!cancelled.exit);

    let state = settle(state, AppMsg::Modal(ModalMsg::Select(1)), &ctx).await;
    let msg = app::handle_key(&state, &key(KeyCode::Enter), &ctx);
    assert_eq!(msg, Some(AppMsg::Modal(ModalMsg::Activate(1))));
    let state = settle(state, AppMsg::Modal(ModalMsg::Activate(1)), &ctx).await;
    assert!(!state.modal.open);
    assert!(state.exit);
}

#[tokio::test]
async fn test_ctrl_c_quits_immediately() {
    let ctx = ctx();
    let state = started(&ctx).await;
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(app::handle_key(&state, &ctrl_c, &ctx), Some(AppMsg::Quit));
}

#[tokio::test]
async fn test_show_logs_lists_captured_lines() {
    let logs = LogBuffer::new(10);
    logs.push("first line".to_string());
    logs.push("second line".to_string());
    let ctx = AppContext::new(Config::default(), Arc::new(InMemoryUserDirectory::sample()), logs);

    let state = settle(started(&ctx).await, AppMsg::ShowLogs, &ctx).await;
    assert!(state.modal.open);
    assert_eq!(state.modal.content.body, "second line\nfirst line");
}

#[tokio::test]
async fn test_modal_scroll_is_clamped_to_body() {
    let logs = LogBuffer::new(10);
    logs.push("only line".to_string());
    let ctx = AppContext::new(Config::default(), Arc::new(InMemoryUserDirectory::sample()), logs);
    let mut state = settle(started(&ctx).await, AppMsg::ShowLogs, &ctx).await;

    for _ in 0..50 {
        if let Some(msg) = app::handle_key(&state, &key(KeyCode::Down), &ctx) {
            state = settle(state, msg, &ctx).await;
        }
    }
    assert_eq!(state.modal.scroll, 0);

    let unchanged = settle(state.clone(), AppMsg::Modal(ModalMsg::Scroll(40)), &ctx).await;
    assert!(Immutable::ptr_eq(&unchanged, &state));
}

#[tokio::test]
async fn test_validate_shows_errors_and_toast() {
    let ctx = ctx();
    let state = started(&ctx).await;
    let state = settle(state, AppMsg::NewRoute(Route::DescribeProject), &ctx).await;

    let msg = app::handle_key(&state, &key(KeyCode::Char('v')), &ctx);
    assert_eq!(
        msg,
        Some(AppMsg::DescribeProject(GlobalMsg::Local(DescribeProjectMsg::Validate)))
    );
    let state = settle(state, msg.unwrap_or(AppMsg::Noop), &ctx).await;

    let Some(PageState::DescribeProject(page)) = &state.page else {
        panic!("describe project page should be live");
    };
    assert!(!page.phases.phases[0].start_date.errors.is_empty());
    assert!(!page.phases.phases[0].max_budget.errors.is_empty());
    assert!(page.phases.phases[1].start_date.errors.is_empty());
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].content.level, ToastLevel::Error);
    assert_eq!(state.toasts[0].content.title, "Inception");
}

#[tokio::test]
async fn test_full_view_renders() {
    let ctx = ctx();
    let state = started(&ctx).await;
    let state = settle(state, AppMsg::NewRoute(Route::DescribeProject), &ctx).await;

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app::view(f, &state, &ctx)).unwrap();

    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Describe Project"));
    assert!(text.contains("Starting Phase"));
    assert!(text.contains("Inception"));
    assert!(text.contains("v: validate"));
}
