pub const PENCIL_WIDTH: u32 = 2;
pub const BRUSH_WIDTH: u32 = 8;
pub const ERASER_WIDTH: u32 = 20;
pub const SHAPE_STROKE_WIDTH: u32 = 2;
pub const SPRAY_RADIUS: f64 = 20.0;
pub const SPRAY_DENSITY: u32 = 50;

pub const DEFAULT_BRUSH_SIZE: u32 = 3;
pub const DEFAULT_COLOR: Rgba = Rgba::rgba(255, 0, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Select,
    Eraser,
    Fill,
    Picker,
    Magnifier,
    Pencil,
    Brush,
    Spray,
    Text,
    Line,
    Curve,
    Rectangle,
    Ellipse,
}

impl Tool {
    /// Maps a toolbox button index to its tool. The toolbox is a 2x7 grid of
    /// 14 buttons; the first two are both the selection tool.
    pub fn from_toolbox_index(index: usize) -> Option<Self> {
        match index {
            0 | 1 => Some(Self::Select),
            2 => Some(Self::Eraser),
            3 => Some(Self::Fill),
            4 => Some(Self::Picker),
            5 => Some(Self::Magnifier),
            6 => Some(Self::Pencil),
            7 => Some(Self::Brush),
            8 => Some(Self::Spray),
            9 => Some(Self::Text),
            10 => Some(Self::Line),
            11 => Some(Self::Curve),
            12 => Some(Self::Rectangle),
            13 => Some(Self::Ellipse),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "select" => Some(Self::Select),
            "eraser" => Some(Self::Eraser),
            "fill" => Some(Self::Fill),
            "picker" => Some(Self::Picker),
            "magnifier" => Some(Self::Magnifier),
            "pencil" => Some(Self::Pencil),
            "brush" => Some(Self::Brush),
            "spray" => Some(Self::Spray),
            "text" => Some(Self::Text),
            "line" => Some(Self::Line),
            "curve" => Some(Self::Curve),
            "rectangle" => Some(Self::Rectangle),
            "ellipse" => Some(Self::Ellipse),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Eraser => "eraser",
            Self::Fill => "fill",
            Self::Picker => "picker",
            Self::Magnifier => "magnifier",
            Self::Pencil => "pencil",
            Self::Brush => "brush",
            Self::Spray => "spray",
            Self::Text => "text",
            Self::Line => "line",
            Self::Curve => "curve",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
        }
    }

    /// Inert tools never start a stroke.
    pub fn is_inert(self) -> bool {
        matches!(self, Self::Select | Self::Magnifier)
    }

    /// Shape tools capture a start point on press and commit once on release.
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Line | Self::Rectangle | Self::Ellipse)
    }

    pub fn cursor_style(self) -> CursorStyle {
        match self {
            Self::Eraser => CursorStyle::Cell,
            Self::Text => CursorStyle::Text,
            _ => CursorStyle::Crosshair,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Crosshair,
    Cell,
    Text,
}

impl CursorStyle {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Crosshair => "crosshair",
            Self::Cell => "cell",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgba(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pub current_tool: Tool,
    pub current_color: Rgba,
    pub brush_size: u32,
    pub last_position: (f64, f64),
    pub stroke_start: (f64, f64),
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            current_tool: Tool::Pencil,
            current_color: DEFAULT_COLOR,
            brush_size: DEFAULT_BRUSH_SIZE,
            last_position: (0.0, 0.0),
            stroke_start: (0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbox_maps_first_two_buttons_to_select() {
        assert_eq!(Tool::from_toolbox_index(0), Some(Tool::Select));
        assert_eq!(Tool::from_toolbox_index(1), Some(Tool::Select));
        assert_eq!(Tool::from_toolbox_index(6), Some(Tool::Pencil));
        assert_eq!(Tool::from_toolbox_index(13), Some(Tool::Ellipse));
        assert_eq!(Tool::from_toolbox_index(14), None);
    }

    #[test]
    fn tool_names_round_trip() {
        for index in 0..14 {
            let tool = Tool::from_toolbox_index(index).expect("toolbox index");
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(Tool::from_name("airbrush"), None);
    }

    #[test]
    fn cursor_hints_match_tool_kind() {
        assert_eq!(Tool::Eraser.cursor_style(), CursorStyle::Cell);
        assert_eq!(Tool::Text.cursor_style(), CursorStyle::Text);
        assert_eq!(Tool::Fill.cursor_style(), CursorStyle::Crosshair);
        assert_eq!(Tool::Pencil.cursor_style().css_name(), "crosshair");
    }

    #[test]
    fn only_select_and_magnifier_are_inert() {
        for index in 0..14 {
            let tool = Tool::from_toolbox_index(index).expect("toolbox index");
            let inert = matches!(tool, Tool::Select | Tool::Magnifier);
            assert_eq!(tool.is_inert(), inert, "tool {}", tool.name());
        }
    }
}
