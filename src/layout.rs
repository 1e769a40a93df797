use crate::config::{BUTTON_GAP, BUTTON_PADDING, BUTTON_WIDTH, TOOLBAR_HEIGHT};
use crate::font;

/// Toolbar actions, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Step,
    Clear,
    Randomize,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Step, Action::Clear, Action::Randomize];

    pub fn label(self) -> &'static str {
        match self {
            Action::Step => "Step",
            Action::Clear => "Clear",
            Action::Randomize => "Randomize",
        }
    }

    /// Position in the toolbar, also the button index in the board shader
    pub fn index(self) -> usize {
        match self {
            Action::Step => 0,
            Action::Clear => 1,
            Action::Randomize => 2,
        }
    }
}

/// Axis-aligned rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    /// `[x, y, width, height]` as laid out in the shader uniform
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

/// Where a button's caption is drawn, in whole font pixels of `scale` screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub rect: Rect,
    pub scale: f32,
    pub len: u32,
}

impl Label {
    /// Center `text` inside `button`, as large as fits in half its height
    fn centered(text: &str, button: Rect) -> Self {
        let (text_width, text_height) = font::text_size(text);
        let by_height = (button.height * 0.5 / text_height as f32).floor();
        let by_width = ((button.width - 4.0) / text_width.max(1) as f32).floor();
        let scale = by_height.min(by_width).max(1.0);

        let width = text_width as f32 * scale;
        let height = text_height as f32 * scale;
        Self {
            rect: Rect {
                x: button.x + ((button.width - width) / 2.0).floor(),
                y: button.y + ((button.height - height) / 2.0).floor(),
                width,
                height,
            },
            scale,
            len: text.chars().count() as u32,
        }
    }

    /// `[x, y, scale, len]` as laid out in the shader uniform
    pub fn to_array(self) -> [f32; 4] {
        [self.rect.x, self.rect.y, self.scale, self.len as f32]
    }
}

/// Board geometry: whole cells fitted into the canvas, remainder split as margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    /// Top-left corner of cell (0, 0)
    pub origin: (f32, f32),
}

impl BoardLayout {
    pub fn fit(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            rows: (canvas_height / cell_size) as usize,
            cols: (canvas_width / cell_size) as usize,
            cell_size: cell_size as f32,
            origin: (
                (canvas_width % cell_size) as f32 / 2.0,
                (canvas_height % cell_size) as f32 / 2.0,
            ),
        }
    }

    /// Resolve a pixel position to `(row, col)`, or `None` in the margin
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let local_x = x - self.origin.0;
        let local_y = y - self.origin.1;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let row = (local_y / self.cell_size) as usize;
        let col = (local_x / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }
}

/// Button strip along the bottom of the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toolbar {
    buttons: [Rect; 3],
}

impl Toolbar {
    pub fn new(top: f32, height: f32, scale: f32) -> Self {
        let padding = BUTTON_PADDING as f32 * scale;
        let gap = BUTTON_GAP as f32 * scale;
        let width = BUTTON_WIDTH as f32 * scale;

        let buttons = Action::ALL.map(|action| Rect {
            x: gap + action.index() as f32 * (width + gap),
            y: top + padding,
            width,
            height: (height - 2.0 * padding).max(1.0),
        });

        Self { buttons }
    }

    pub fn rect(&self, action: Action) -> Rect {
        self.buttons[action.index()]
    }

    pub fn label(&self, action: Action) -> Label {
        Label::centered(action.label(), self.rect(action))
    }

    pub fn button_at(&self, x: f32, y: f32) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&action| self.rect(action).contains(x, y))
    }
}

/// What a pointer position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Button(Action),
    Cell(usize, usize),
}

/// Full window layout: board canvas on top, toolbar below
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub board: BoardLayout,
    pub toolbar: Toolbar,
    /// Physical surface size the layout was computed for
    pub surface_size: (u32, u32),
}

impl ScreenLayout {
    /// Lay out a surface of `width`x`height` physical pixels.
    ///
    /// `cell_size` is in logical pixels and scaled by `scale`.
    pub fn new(width: u32, height: u32, cell_size: u32, scale: f64) -> Self {
        let toolbar_height = (TOOLBAR_HEIGHT as f64 * scale).round() as u32;
        let canvas_height = height.saturating_sub(toolbar_height);
        let cell_px = (cell_size as f64 * scale).round().max(1.0) as u32;

        Self {
            board: BoardLayout::fit(width, canvas_height, cell_px),
            toolbar: Toolbar::new(canvas_height as f32, toolbar_height as f32, scale as f32),
            surface_size: (width, height),
        }
    }

    /// Single entry point for pointer hit-testing
    pub fn hit(&self, x: f32, y: f32) -> Option<Hit> {
        if let Some(action) = self.toolbar.button_at(x, y) {
            return Some(Hit::Button(action));
        }
        self.board
            .cell_at(x, y)
            .map(|(row, col)| Hit::Cell(row, col))
    }
}
