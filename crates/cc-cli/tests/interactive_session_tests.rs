//! Scripted end-to-end sessions over the interactive prompt loop

use cc_catalog::built_in_catalog;
use craftcalc::prompt::PromptSession;

/// Run a session against the built-in catalog with scripted input.
fn run_session(input: &str) -> String {
    let catalog = built_in_catalog();
    let mut output = Vec::new();
    PromptSession::new(&catalog, input.as_bytes(), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_quit_immediately() {
    let output = run_session("q\n");
    assert!(output.contains("=== Raw-Material Calculator ==="));
    assert!(output.contains("Available raw materials:"));
    assert!(output.contains("  - cobblestone"));
    assert!(output.contains("  - wood"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_successful_computation() {
    let output = run_session("wood\nplank\n5\nq\n");
    assert!(output.contains("Craftable items for 'wood':"));
    assert!(output.contains("You need 2 raw 'wood' unit(s) to craft 5 'plank'(s)."));
}

#[test]
fn test_exact_batch_quantity() {
    let output = run_session("wood\nplank\n4\nq\n");
    assert!(output.contains("You need 1 raw 'wood' unit(s) to craft 4 'plank'(s)."));
}

#[test]
fn test_fractional_result() {
    // stick: batch of 4, 0.25 raw per batch; ceil(10/4) = 3 batches
    let output = run_session("wood\nstick\n10\nq\n");
    assert!(output.contains("You need 0.75 raw 'wood' unit(s) to craft 10 'stick'(s)."));
}

#[test]
fn test_single_output_recipe() {
    let output = run_session("cobblestone\nfurnace\n3\nq\n");
    assert!(output.contains("You need 24 raw 'cobblestone' unit(s) to craft 3 'furnace'(s)."));
}

#[test]
fn test_unknown_material_reprompts() {
    let output = run_session("dirt\nq\n");
    assert!(output.contains(" -> 'dirt' isn't a valid material. Try again."));
    // Session continued to a fresh material prompt before quitting.
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_unknown_item_returns_to_menu() {
    let output = run_session("wood\nshield\nq\n");
    assert!(output.contains(" -> 'shield' not found for material 'wood'. Returning to menu."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_non_numeric_quantity_restarts() {
    let output = run_session("wood\nplank\nlots\nq\n");
    assert!(output.contains(" -> Quantity must be a positive integer. Starting over."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_zero_quantity_restarts() {
    let output = run_session("wood\nplank\n0\nq\n");
    assert!(output.contains(" -> Quantity must be a positive integer. Starting over."));
}

#[test]
fn test_negative_quantity_restarts() {
    let output = run_session("wood\nplank\n-3\nq\n");
    assert!(output.contains(" -> Quantity must be a positive integer. Starting over."));
}

#[test]
fn test_item_listing_shows_batch_details() {
    let output = run_session("wood\nq_not_an_item\nq\n");
    assert!(output.contains("(makes 4  at a time, costs 1 raw units/batch)"));
    assert!(output.contains("(makes 3  at a time, costs 1.5 raw units/batch)"));
}

#[test]
fn test_multiple_computations_in_one_session() {
    let output = run_session("wood\nplank\n5\nwood\ndoor\n7\nq\n");
    assert!(output.contains("You need 2 raw 'wood' unit(s) to craft 5 'plank'(s)."));
    // door: batch of 3, 1.5 raw per batch; ceil(7/3) = 3 batches
    assert!(output.contains("You need 4.5 raw 'wood' unit(s) to craft 7 'door'(s)."));
}

#[test]
fn test_eof_mid_session() {
    // Input ends after the item prompt; session ends without a result.
    let output = run_session("wood\nplank\n");
    assert!(output.contains("Quantity needed: "));
    assert!(!output.contains("You need"));
}
