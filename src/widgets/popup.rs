use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect for the `index`-th card in a stack anchored below the top edge.
///
/// Cards are horizontally centered with a small margin on each side and
/// stacked downward without gaps.
pub fn top_stacked_card(frame_area: Rect, index: u16, card_height: u16, max_width: u16) -> Rect {
    let margin = 2;
    let width = max_width.min(frame_area.width.saturating_sub(margin * 2));
    let x = (frame_area.width.saturating_sub(width)) / 2;
    let y = 1 + index * card_height;

    Rect {
        x,
        y,
        width,
        height: card_height.min(frame_area.height.saturating_sub(y)),
    }
}

/// Rect hugging the bottom-right corner with a small margin.
pub fn bottom_right_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let margin = 2;
    let popup_width = width.min(frame_area.width.saturating_sub(margin * 2));
    let popup_height = height.min(frame_area.height.saturating_sub(margin * 2));

    Rect {
        x: frame_area.width.saturating_sub(popup_width + margin),
        y: frame_area.height.saturating_sub(popup_height + margin),
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
