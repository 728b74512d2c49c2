//! Terminal input decoding

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thermtop_types::DashboardEvent;

/// Translate a terminal event into a dashboard event.
///
/// Returns `None` for input the dashboard ignores. Grow/shrink are always
/// emitted; the controller drops them unless manual height is enabled.
pub fn map_event(event: &Event) -> Option<DashboardEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Resize(width, height) => Some(DashboardEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<DashboardEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Some(DashboardEvent::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(DashboardEvent::Quit),
        KeyCode::Up => Some(DashboardEvent::Grow),
        KeyCode::Down => Some(DashboardEvent::Shrink),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q')] {
            assert_eq!(map_event(&key(code, KeyModifiers::NONE)), Some(DashboardEvent::Quit));
        }
        assert_eq!(
            map_event(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(DashboardEvent::Quit)
        );
        assert_eq!(map_event(&key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_height_keys() {
        assert_eq!(map_event(&key(KeyCode::Up, KeyModifiers::NONE)), Some(DashboardEvent::Grow));
        assert_eq!(
            map_event(&key(KeyCode::Down, KeyModifiers::NONE)),
            Some(DashboardEvent::Shrink)
        );
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            map_event(&Event::Resize(100, 50)),
            Some(DashboardEvent::Resize {
                width: 100,
                height: 50
            })
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release), None);
        assert_eq!(map_event(&Event::FocusGained), None);
    }
}
