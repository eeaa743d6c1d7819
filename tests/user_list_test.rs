use marketplace::ui::core::{AppContext, Immutable, PageComponent, SharedState};
use marketplace::ui::pages::user::helpers::{badge_color, map_user_type_to_display_type};
use marketplace::ui::pages::user::list::{table_body_rows, UserListMsg, UserListState};
use marketplace::ui::components::TableMsg;
use marketplace::users::{InMemoryUserDirectory, User, UserType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::TestBackend, Terminal};

fn two_users() -> AppContext {
    AppContext::with_users(InMemoryUserDirectory::new(vec![
        User {
            active: true,
            user_type: UserType::Vendor,
            name: "A".to_string(),
            admin: false,
        },
        User {
            active: false,
            user_type: UserType::Buyer,
            name: "B".to_string(),
            admin: true,
        },
    ]))
}

#[test]
fn test_rows_follow_directory() {
    let ctx = two_users();
    let rows = table_body_rows(&ctx);
    assert_eq!(rows.len(), 2);

    let first: Vec<String> = rows[0].iter().map(|cell| cell.text()).collect();
    let second: Vec<String> = rows[1].iter().map(|cell| cell.text()).collect();
    assert_eq!(first[0].trim(), "Active");
    assert_eq!(first[1], "Vendor");
    assert_eq!(first[2], "A");
    assert!(first[3].is_empty());

    assert_eq!(second[0].trim(), "Inactive");
    assert_eq!(second[1], "Buyer");
    assert_eq!(second[3], ctx.icons.glyph(marketplace::icons::Icon::Check));
}

#[test]
fn test_status_badge_reads_active_iff_user_active() {
    let ctx = AppContext::default();
    let users = ctx.users.all_users();
    let rows = table_body_rows(&ctx);
    assert_eq!(rows.len(), users.len());
    for (user, row) in users.iter().zip(&rows) {
        assert_eq!(row[0].text().trim() == "Active", user.active);
    }
}

#[test]
fn test_helpers() {
    assert_eq!(map_user_type_to_display_type(UserType::ProgramStaff), "Program Staff");
    assert_eq!(map_user_type_to_display_type(UserType::Buyer), "Buyer");
    assert_eq!(badge_color(true), "success");
    assert_eq!(badge_color(false), "secondary");
}

#[test]
fn test_init_uses_user_list_namespace() {
    let ctx = two_users();
    let page = UserListState::init(&SharedState::default(), &ctx);
    assert_eq!(page.table.id_namespace, "user-list-table");
    assert_eq!(page.table.selected, None);
    assert_eq!(UserListState::metadata(&page).title, "List Users");
}

#[test]
fn test_keys_select_rows_within_directory() {
    let ctx = two_users();
    let page = Immutable::new(UserListState::init(&SharedState::default(), &ctx));

    let msg = UserListState::handle_key(&page, &KeyEvent::from(KeyCode::End), &ctx);
    assert_eq!(msg, Some(UserListMsg::Table(TableMsg::Select(Some(1)))));

    let (page, _) = UserListState::update(page, UserListMsg::Table(TableMsg::Select(Some(1))));
    assert_eq!(page.table.selected, Some(1));
    assert_eq!(UserListState::handle_key(&page, &KeyEvent::from(KeyCode::Down), &ctx), None);
}

#[test]
fn test_view_renders_heading_and_rows() {
    let ctx = two_users();
    let page = UserListState::init(&SharedState::default(), &ctx);
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal
        .draw(|f| UserListState::view(&page, f, f.area(), &ctx))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let text: String = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");
    assert!(text.contains("Digital Marketplace Users"));
    assert!(text.contains("Account Type"));
    assert!(text.contains("Inactive"));
    assert!(text.contains("Vendor"));
}
