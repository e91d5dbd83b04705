//! End-to-end tests for the command driver.

use regform_common::FormPhase;
use regform_config::RegformConfig;
use regform_form::FieldId;

use super::*;

const VALID_SCRIPT: &str = "\
set firstName Ada
set lastName Lovelace
set bio Writes notes on engines
set email ada@example.com
set phone 9876543210
set address1 12 St James's Square
set city London
set state Greater London
set country United Kingdom
set zipcode 560001
";

fn run_script(app: &mut RegistrationApp, script: &str) -> String {
    let mut out = Vec::new();
    app.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn app_with(reset_clears_images: bool) -> RegistrationApp {
    let mut config = RegformConfig::default();
    config.form.reset_clears_images = reset_clears_images;
    RegistrationApp::new(config)
}

#[test]
fn valid_submit_acknowledges_and_resets() {
    let mut app = app_with(false);
    let output = run_script(&mut app, &format!("{VALID_SCRIPT}submit\n"));

    assert!(output.contains("[info] Registration: Form submitted successfully!"));
    assert_eq!(app.submission_count(), 1);
    assert_eq!(app.store().phase(), FormPhase::Clean);
    assert!(app.store().values().is_blank());

    let submitted = app.submissions.last().unwrap();
    assert_eq!(submitted.get(FieldId::State), "Greater London");
    assert_eq!(submitted.get(FieldId::Address1), "12 St James's Square");
}

#[test]
fn rejected_submit_lists_errors() {
    let mut app = app_with(false);
    let output = run_script(&mut app, "set email nope\nsubmit\n");

    assert!(output.contains("email: Invalid email format"));
    assert!(output.contains("firstName: First Name is required"));
    assert!(!output.contains("address2:"));
    assert!(output.contains("[warning] Registration: 10 field(s) need attention"));
    assert_eq!(app.submission_count(), 0);
    assert_eq!(app.store().phase(), FormPhase::SubmitAttempted);
}

#[test]
fn set_reports_error_for_touched_field() {
    let mut app = app_with(false);
    let output = run_script(&mut app, "set phone 12345\nset zipcode 123456\n");

    assert!(output.contains("phone: Phone number must be exactly 10 digits"));
    assert!(!output.contains("zipcode:"));
}

#[test]
fn bad_lines_do_not_stop_the_driver() {
    let mut app = app_with(false);
    let output = run_script(&mut app, "set nickname ada\nfly\nset city Pune\n");

    assert!(output.contains("error: unknown field: nickname"));
    assert!(output.contains("error: invalid command: fly"));
    assert_eq!(app.store().value(FieldId::City), "Pune");
}

#[test]
fn quit_stops_reading() {
    let mut app = app_with(false);
    run_script(&mut app, "set city Pune\nquit\nset city Delhi\n");
    assert_eq!(app.store().value(FieldId::City), "Pune");
}

#[test]
fn cover_selection_reaches_banner() {
    let mut app = app_with(false);
    let output = run_script(&mut app, "cover /tmp/beach.jpg\nshow\n");

    let url = app.cover().current().unwrap().url().to_string();
    assert!(output.contains(&format!("cover -> {url}")));
    assert!(output.contains(&format!("[banner] --cover-image-url: url({url})")));
    assert!(output.contains("[cover] Change Cover Photo"));
}

#[test]
fn profile_selection_leaves_banner_default() {
    let mut app = app_with(false);
    let output = run_script(&mut app, "profile /tmp/me.png\nshow\n");

    assert!(app.profile().has_image());
    assert!(output.contains("[banner] Personal Details"));
    assert!(output.contains("[cover] Upload Cover Photo"));
}

#[test]
fn reset_keeps_images_by_default() {
    let mut app = app_with(false);
    run_script(
        &mut app,
        "profile /tmp/me.png\ncover /tmp/beach.jpg\nset city Pune\nreset\n",
    );

    assert!(app.store().values().is_blank());
    assert!(app.profile().has_image());
    assert!(app.cover().has_image());
    assert!(app.banner.current().is_some());
}

#[test]
fn reset_clears_images_when_configured() {
    let mut app = app_with(true);
    run_script(&mut app, "profile /tmp/me.png\ncover /tmp/beach.jpg\ncancel\n");

    assert!(!app.profile().has_image());
    assert!(!app.cover().has_image());
    assert!(app.banner.current().is_none());
}

#[test]
fn successful_submit_follows_image_reset_setting() {
    let mut app = app_with(true);
    run_script(&mut app, &format!("cover /tmp/beach.jpg\n{VALID_SCRIPT}submit\n"));

    assert_eq!(app.submission_count(), 1);
    assert!(!app.cover().has_image());
}

#[test]
fn show_hides_untouched_errors() {
    let mut app = app_with(false);
    let output = run_script(&mut app, "set email nope\nshow\n");

    assert!(output.contains("email     = \"nope\"  ! Invalid email format"));
    assert!(output.contains("firstName = \"\"\n"));
    assert!(output.contains("phase=Editing"));
}

#[test]
fn events_are_drained_after_each_command() {
    let mut app = app_with(false);
    run_script(&mut app, "set city Pune\nblur phone\n");
    assert_eq!(app.poll_events(), 0);
}
