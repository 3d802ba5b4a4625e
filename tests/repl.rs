use chrono::NaiveDate;
use std::io::Cursor;

use dating_tracker::repl::Flow;
use dating_tracker::{Config, ContactStore, FixedClock, NewContact, Session, Status};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn store() -> ContactStore {
    ContactStore::open_in_memory()
        .unwrap()
        .with_clock(FixedClock::at_date(date("2025-12-20")))
}

fn session(store: ContactStore, input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    Session::new(
        store,
        Config::default(),
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    )
}

/// Runs a scripted session to completion.
fn run_script(store: ContactStore, input: &str) -> (ContactStore, String) {
    let mut session = session(store, input);
    session.run().unwrap();
    let (store, output) = session.into_parts();
    (store, String::from_utf8(output).unwrap())
}

fn seed_sarah(store: &ContactStore) -> i64 {
    store
        .create_contact(
            &NewContact::new("Sarah", date("2025-12-01"))
                .platform("Tinder")
                .phone("555-0100"),
        )
        .unwrap()
}

#[test]
fn add_note_contacted_view_scenario() {
    let script = "add\nSarah\nTinder\n\n2025-12-01\nactive\n\n\
                  note 1 Likes hiking\n\
                  contacted 1 2025-12-15\n\
                  view 1\n\
                  quit\n";
    let (store, output) = run_script(store(), script);

    assert!(output.contains("Added contact: Sarah (ID: 1)"));
    assert!(output.contains("Note added to Sarah."));
    assert!(output.contains("Last contact date set to: 2025-12-15"));
    assert!(output.contains("Name:              Sarah"));
    assert!(output.contains("Platform:          Tinder"));
    assert!(output.contains("Phone:             Not specified"));
    assert!(output.contains("First Contact:     2025-12-01"));
    assert!(output.contains("Last Contact:      5 days ago"));
    assert!(output.contains("Likes hiking"));
    assert!(output.trim_end().ends_with("Goodbye!"));

    let contact = store.get_contact(1).unwrap().unwrap();
    assert_eq!(contact.status, Status::Active);
    assert_eq!(contact.last_contact_date, Some(date("2025-12-15")));
    let notes = store.get_notes(1).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].text, "Likes hiking");
}

#[test]
fn delete_with_confirmation_then_view_reports_not_found() {
    let store = store();
    let id = seed_sarah(&store);
    store.add_note(id, "Likes hiking").unwrap();

    let (store, output) = run_script(store, "delete 1\ny\nview 1\n");

    assert!(output.contains("Delete Sarah (ID: 1) and 1 note(s)? (y/n): "));
    assert!(output.contains("Deleted contact: Sarah"));
    assert!(output.contains("Contact with ID 1 not found."));
    assert!(store.get_contact(id).unwrap().is_none());
}

#[test]
fn declined_delete_keeps_contact() {
    let store = store();
    let id = seed_sarah(&store);

    let (store, output) = run_script(store, "delete 1\nn\n");

    assert!(output.contains("Deletion cancelled."));
    assert!(store.get_contact(id).unwrap().is_some());
}

#[test]
fn delete_missing_contact_does_not_prompt() {
    let (_, output) = run_script(store(), "delete 4\n");
    assert!(output.contains("Contact with ID 4 not found."));
    assert!(!output.contains("(y/n)"));
}

#[test]
fn add_with_blank_name_is_aborted() {
    // The remaining lines are then read as commands, not as answers.
    let (store, output) = run_script(store(), "add\n\nlist\n");

    assert!(output.contains("Name is required."));
    assert!(output.contains("No contacts found."));
    assert!(store.list_contacts(None, None).unwrap().is_empty());
}

#[test]
fn add_reprompts_invalid_date_and_status() {
    let script = "add\nJo\n\n\n12/01/2025\n2025-12-02\nmarried\nDating\nFirst date went well\n";
    let (store, output) = run_script(store(), script);

    assert!(output.contains("Invalid date '12/01/2025'. Use the YYYY-MM-DD format."));
    assert!(output.contains("Invalid status 'married'."));

    let contact = store.get_contact(1).unwrap().unwrap();
    assert_eq!(contact.name, "Jo");
    assert_eq!(contact.platform, None);
    assert_eq!(contact.first_contact_date, date("2025-12-02"));
    assert_eq!(contact.status, Status::Dating);
    assert_eq!(store.get_notes(1).unwrap()[0].text, "First date went well");
}

#[test]
fn add_defaults_date_and_status() {
    let (store, _) = run_script(store(), "add\nAlex\nHinge\n\n\n\n\n");

    let contact = store.get_contact(1).unwrap().unwrap();
    assert_eq!(contact.first_contact_date, date("2025-12-20"));
    assert_eq!(contact.status, Status::Active);
    assert!(store.get_notes(1).unwrap().is_empty());
}

#[test]
fn update_blank_answers_preserve_values() {
    let store = store();
    let id = seed_sarah(&store);

    let (store, output) = run_script(store, "update 1\n\nHinge\n\n\n2025-12-18\ndating\n");

    assert!(output.contains("Contact 1 updated successfully."));
    let contact = store.get_contact(id).unwrap().unwrap();
    assert_eq!(contact.name, "Sarah");
    assert_eq!(contact.platform.as_deref(), Some("Hinge"));
    assert_eq!(contact.phone.as_deref(), Some("555-0100"));
    assert_eq!(contact.first_contact_date, date("2025-12-01"));
    assert_eq!(contact.last_contact_date, Some(date("2025-12-18")));
    assert_eq!(contact.status, Status::Dating);
}

#[test]
fn update_with_all_blank_answers_changes_nothing() {
    let store = store();
    seed_sarah(&store);

    let (_, output) = run_script(store, "update 1\n\n\n\n\n\n\n");
    assert!(output.contains("No changes made."));
}

#[test]
fn list_filters_and_table() {
    let store = store();
    seed_sarah(&store);
    store
        .create_contact(
            &NewContact::new("Jo", date("2025-11-01"))
                .platform("Hinge")
                .status(Status::Dating),
        )
        .unwrap();

    let (_, output) = run_script(store, "list dating\nlist all Tinder\nlist bogus\n");

    assert!(output.contains("ID   Name                 Platform     Talking For     Last Contact    Status"));
    assert!(output.contains("2    Jo                   Hinge        1 month         Never           dating"));
    assert!(output.contains("1    Sarah                Tinder       2 weeks         Never           active"));
    assert_eq!(output.matches("Total: 1 contact(s)").count(), 2);
    assert!(output.contains("Invalid status 'bogus'."));
}

#[test]
fn search_matches_names_and_notes() {
    let store = store();
    let sarah = seed_sarah(&store);
    store.add_note(sarah, "Loves Coffee  shops").unwrap();

    let (_, output) = run_script(store, "search coffee  SHOPS\nsearch nobody\n");

    assert!(output.contains("Search results for 'coffee  SHOPS':"));
    assert!(output.contains("Sarah"));
    assert!(output.contains("No contacts found matching 'nobody'."));
}

#[test]
fn reminders_list_stale_open_contacts() {
    let store = store();
    seed_sarah(&store); // first contact 19 days ago, never contacted
    let recent = store
        .create_contact(&NewContact::new("Jo", date("2025-12-01")))
        .unwrap();
    store.set_last_contact(recent, date("2025-12-18")).unwrap();
    store
        .create_contact(&NewContact::new("Old", date("2025-01-01")).status(Status::Ghosted))
        .unwrap();

    let (_, output) = run_script(store, "reminders\n");

    assert!(output.contains("REMINDERS - Contacts to reach out to:"));
    assert!(output.contains("• Sarah (Tinder) - Last contact: 2 weeks ago"));
    assert!(!output.contains("• Jo"));
    assert!(!output.contains("• Old"));
}

#[test]
fn reminders_when_nothing_is_due() {
    let (_, output) = run_script(store(), "reminders\n");
    assert!(output.contains("All active contacts have been contacted recently!"));
}

#[test]
fn user_errors_do_not_stop_the_loop() {
    let store = store();
    seed_sarah(&store);

    let script = "\n   \nfrobnicate\nnote 7 hello\nnote 1    \ncontacted 1 someday\n\
                  contacted 9\nview x\nhelp\nlist\n";
    let (store, output) = run_script(store, script);

    assert!(output.contains("Unknown command: frobnicate. Type 'help' for available commands."));
    assert!(output.contains("Contact with ID 7 not found."));
    assert!(output.contains("Usage: note <id> <note text>"));
    assert!(output.contains("Invalid date 'someday'. Use the YYYY-MM-DD format."));
    assert!(output.contains("Contact with ID 9 not found."));
    assert!(output.contains("Invalid ID. Please provide a number."));
    assert!(output.contains("DATING CONTACT TRACKER - HELP"));
    assert!(output.contains("Total: 1 contact(s)"));
    assert_eq!(store.get_contact(1).unwrap().unwrap().last_contact_date, None);
}

#[test]
fn contacted_without_date_uses_today() {
    let store = store();
    let id = seed_sarah(&store);

    let (store, _) = run_script(store, "contacted 1\n");
    assert_eq!(
        store.get_contact(id).unwrap().unwrap().last_contact_date,
        Some(date("2025-12-20"))
    );
}

#[test]
fn execute_reports_flow() {
    let mut session = session(store(), "");
    assert_eq!(session.execute("").unwrap(), Flow::Continue);
    assert_eq!(session.execute("help").unwrap(), Flow::Continue);
    assert_eq!(session.execute("Quit").unwrap(), Flow::Quit);
    assert!(session.execute("nope").is_err());
}

#[test]
fn end_of_input_stops_the_session() {
    let (_, output) = run_script(store(), "list");
    assert!(output.contains("No contacts found."));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn extra_arguments_are_rejected_not_ignored() {
    let store = store();
    let id = seed_sarah(&store);

    let (store, output) = run_script(store, "contacted 1 2025-12-15 oops\nlist active Tinder more\n");

    assert!(output.contains("Usage: contacted <id> [date]"));
    assert!(output.contains("Usage: list [status] [platform]"));
    assert_eq!(store.get_contact(id).unwrap().unwrap().last_contact_date, None);
}
