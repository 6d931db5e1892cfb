//! Stylesheet injected alongside the widget markup.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// Hover glow used when the accent color cannot be parsed.
const FALLBACK_GLOW: &str = "rgba(0, 0, 0, 0.15)";

const STYLESHEET: &str = r"
#clarity-widget-container { position: fixed; bottom: 20px; right: 20px; z-index: 9999; font-family: 'Inter', sans-serif; }
#clarity-launcher { background: {primary}; width: 60px; height: 60px; border-radius: 50%; box-shadow: 0 4px 12px rgba(0,0,0,0.15); cursor: pointer; display: flex; align-items: center; justify-content: center; transition: transform 0.2s; }
#clarity-launcher:hover { transform: scale(1.05); }
#clarity-window { display: none; width: 420px; height: 700px; background: #fff; border-radius: 12px; box-shadow: 0 8px 24px rgba(0,0,0,0.2); flex-direction: column; overflow: hidden; position: absolute; bottom: 80px; right: 0; }
.clarity-header { background: {primary}; padding: 16px; color: white; font-weight: 600; display: flex; justify-content: space-between; align-items: center; }
.clarity-body { flex: 1; padding: 16px; overflow-y: auto; background: #F9FAFB; display: flex; flex-direction: column; gap: 12px; }
.clarity-input-area { padding: 12px; border-top: 1px solid #E5E7EB; background: #fff; display: flex; flex-direction: column; gap: 8px; }
.clarity-input-row { display: flex; gap: 8px; align-items: center; }
.clarity-input { flex: 1; border: 1px solid #D1D5DB; border-radius: 20px; padding: 8px 16px; outline: none; }
.clarity-send { background: none; border: none; cursor: pointer; font-size: 20px; }
.msg { padding: 10px 14px; border-radius: 12px; max-width: 90%; font-size: 14px; line-height: 1.5; white-space: pre-wrap; }
.msg-assistant { background: #fff; border: 1px solid #E5E7EB; color: #1F2937; align-self: flex-start; }
.msg-user { background: {primary}; color: white; align-self: flex-end; }
.msg-rich { white-space: normal; }
.msg-rich p { margin: 0 0 8px; }
.msg-rich p:last-child { margin-bottom: 0; }
.msg-rich pre { white-space: pre-wrap; background: #F3F4F6; padding: 8px; border-radius: 6px; }
.msg-rich table { border-collapse: collapse; }
.msg-rich td, .msg-rich th { border: 1px solid #E5E7EB; padding: 2px 6px; }

.mentor-card { background: white; border: 1px solid #E5E7EB; border-radius: 8px; padding: 12px; margin-top: 8px; cursor: pointer; transition: all 0.3s ease; position: relative; }
.mentor-card:hover { border-color: {primary}; transform: translateY(-2px); box-shadow: 0 4px 12px {glow}; }
.mentor-name { font-weight: 700; color: #111827; }
.mentor-bio { font-size: 12px; color: #6B7280; margin: 4px 0; }
.mentor-outcome { font-size: 11px; color: #059669; background: #ECFDF5; padding: 2px 6px; border-radius: 4px; display: inline-block; font-weight: 600; }

.mentor-tooltip { position: absolute; bottom: 100%; left: 50%; transform: translateX(-50%); background: #1F2937; color: white; padding: 10px 14px; border-radius: 8px; font-size: 12px; line-height: 1.4; width: 250px; opacity: 0; visibility: hidden; transition: all 0.2s ease; z-index: 100; box-shadow: 0 4px 12px rgba(0,0,0,0.3); }
.mentor-tooltip::after { content: ''; position: absolute; top: 100%; left: 50%; transform: translateX(-50%); border: 6px solid transparent; border-top-color: #1F2937; }
.mentor-card:hover .mentor-tooltip { opacity: 1; visibility: visible; }

.review-buttons { display: flex; gap: 8px; margin-top: 8px; }
.review-btn { padding: 8px 16px; border-radius: 20px; cursor: pointer; font-size: 13px; font-weight: 600; border: none; transition: all 0.2s; }
.review-btn.approve { background: #10B981; color: white; }
.review-btn.approve:hover { background: #059669; }
.review-btn.edit { background: #F3F4F6; color: #374151; }
.review-btn.edit:hover { background: #E5E7EB; }

.file-badge { display: none; align-items: center; gap: 6px; padding: 6px 10px; background: #EFF6FF; border: 1px solid #BFDBFE; border-radius: 8px; font-size: 12px; color: {primary}; }
.file-badge.active { display: flex; }
.file-badge .remove { cursor: pointer; font-weight: bold; margin-left: 4px; }
.upload-btn { cursor: pointer; padding: 4px 8px; background: #F3F4F6; border-radius: 8px; font-size: 18px; }
.upload-btn:hover { background: #E5E7EB; }

.doc-saved { background: #10B981; color: white; padding: 8px 12px; border-radius: 8px; font-size: 12px; display: inline-flex; align-items: center; gap: 6px; margin: 8px 0; }
";

/// Full stylesheet themed with `primary_color`.
pub fn stylesheet(primary_color: &str) -> String {
    let glow = accent_glow(primary_color).unwrap_or_else(|| FALLBACK_GLOW.to_owned());
    STYLESHEET.replace("{primary}", primary_color).replace("{glow}", &glow)
}

/// `rgba(..)` of `hex` at 15% opacity, for `#rgb` / `#rrggbb` input.
pub fn accent_glow(hex: &str) -> Option<String> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    let (r, g, b) = match digits.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..=i].repeat(2), 16);
            (channel(0), channel(1), channel(2))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
            (channel(0), channel(2), channel(4))
        }
        _ => return None,
    };
    match (r, g, b) {
        (Ok(r), Ok(g), Ok(b)) => Some(format!("rgba({r}, {g}, {b}, 0.15)")),
        _ => None,
    }
}
