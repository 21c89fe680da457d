//! Dialogs answered through the terminal key handling, end to end

use adialog_app::{
    DialogOptions, Dialogs, NumberPrompt, PromptOptions, PromptValue, SelectOptions, Selection,
    TimePrompt,
};
use adialog_host::test_utils::wait_for_modal;
use adialog_host::Document;
use adialog_tui::event::InputKey;
use adialog_tui::{Focus, ModalController};

async fn controller_for(document: &Document) -> ModalController {
    let id = wait_for_modal(document).await;
    ModalController::new(document, &id).unwrap()
}

fn press(controller: &mut ModalController, keys: &[InputKey]) {
    for key in keys {
        controller.handle_key(*key).unwrap();
    }
}

#[tokio::test]
async fn test_select_with_arrow_keys() {
    let document = Document::new();
    let dialogs = Dialogs::new(document.clone());
    let options = SelectOptions::new(
        DialogOptions::new("Colour", ""),
        [("r", "Red"), ("g", "Green"), ("b", "Blue")],
    );

    let (answer, _) = tokio::join!(dialogs.select(options), async {
        let mut controller = controller_for(&document).await;
        assert_eq!(controller.focus(), Focus::Control(0));

        press(
            &mut controller,
            &[
                InputKey::Down,
                InputKey::Down,
                InputKey::Up,
                InputKey::Tab,
                InputKey::Tab,
            ],
        );
        // Cancel comes first, OK second
        assert_eq!(controller.focus(), Focus::Button(0));
        press(&mut controller, &[InputKey::Right, InputKey::Enter]);
    });

    assert_eq!(answer.unwrap(), Some(Selection::Single("g".into())));
}

#[tokio::test]
async fn test_multiselect_with_space() {
    let document = Document::new();
    let dialogs = Dialogs::new(document.clone());
    let options =
        SelectOptions::new(DialogOptions::new("Toppings", ""), ["ham", "olives", "basil"])
            .multiselect();

    let (answer, _) = tokio::join!(dialogs.select(options), async {
        let mut controller = controller_for(&document).await;
        press(
            &mut controller,
            &[
                InputKey::Char(' '),
                InputKey::Down,
                InputKey::Down,
                InputKey::Char(' '),
                InputKey::BackTab,
                InputKey::BackTab,
                InputKey::BackTab,
            ],
        );
        assert_eq!(controller.focus(), Focus::Button(1));
        press(&mut controller, &[InputKey::Enter]);
    });

    assert_eq!(
        answer.unwrap(),
        Some(Selection::Multiple(vec!["ham".into(), "basil".into()]))
    );
}

#[tokio::test]
async fn test_number_prompt_out_of_range_is_held_open() {
    let document = Document::new();
    let dialogs = Dialogs::new(document.clone());
    let options = PromptOptions::Number(NumberPrompt {
        dialog: DialogOptions::new("How many?", ""),
        min: Some(1.0),
        max: Some(10.0),
        ..Default::default()
    });

    let (answer, _) = tokio::join!(dialogs.prompt(options), async {
        let mut controller = controller_for(&document).await;
        // Letters never reach a decimal input
        press(
            &mut controller,
            &[InputKey::Char('1'), InputKey::Char('x'), InputKey::Char('2')],
        );

        press(&mut controller, &[InputKey::Tab, InputKey::Tab, InputKey::Enter]);
        assert_eq!(controller.focus(), Focus::Control(0));
        assert!(controller.hint().is_some());
        assert_eq!(document.open_modals().len(), 1);

        press(
            &mut controller,
            &[
                InputKey::Backspace,
                InputKey::Tab,
                InputKey::Tab,
                InputKey::Enter,
            ],
        );
    });

    assert_eq!(answer.unwrap(), Some(PromptValue::Number(1.0)));
}

#[tokio::test]
async fn test_time_prompt_typed_with_letters_filtered() {
    let document = Document::new();
    let dialogs = Dialogs::new(document.clone());
    let options = PromptOptions::Time(TimePrompt {
        dialog: DialogOptions::new("When?", ""),
        ..Default::default()
    });

    let (answer, _) = tokio::join!(dialogs.prompt(options), async {
        let mut controller = controller_for(&document).await;
        for c in "9am:05".chars() {
            controller.handle_key(InputKey::Char(c)).unwrap();
        }
        press(&mut controller, &[InputKey::Tab, InputKey::Tab, InputKey::Enter]);
    });

    assert_eq!(answer.unwrap(), Some(PromptValue::Time("09:05".into())));
}

#[tokio::test]
async fn test_escape_declines_confirm() {
    let document = Document::new();
    let dialogs = Dialogs::new(document.clone());

    let (answer, _) = tokio::join!(dialogs.confirm(DialogOptions::new("Quit?", "")), async {
        let mut controller = controller_for(&document).await;
        press(&mut controller, &[InputKey::Esc]);
    });

    assert!(!answer.unwrap());
    assert!(document.is_empty());
}

#[tokio::test]
async fn test_second_dialog_after_first_closes() {
    let document = Document::new();
    let dialogs = Dialogs::new(document.clone());

    let (first, _) = tokio::join!(dialogs.confirm(DialogOptions::new("One", "")), async {
        let mut controller = controller_for(&document).await;
        press(&mut controller, &[InputKey::Enter]);
    });
    let (second, _) = tokio::join!(dialogs.confirm(DialogOptions::new("Two", "")), async {
        let mut controller = controller_for(&document).await;
        press(&mut controller, &[InputKey::Left, InputKey::Enter]);
    });

    assert!(first.unwrap());
    assert!(!second.unwrap());
}
