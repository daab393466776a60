use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxView {
    #[default]
    Closed,
    Open { project: usize, image: usize },
}

impl LightboxView {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Select(usize),
    Next,
    Previous,
    Close,
}

impl LightboxAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lightbox {
    image_counts: Rc<[usize]>,
    view: LightboxView,
}

impl Lightbox {
    pub fn new(image_counts: Vec<usize>) -> Self {
        Self {
            image_counts: image_counts.into(),
            view: LightboxView::Closed,
        }
    }

    pub fn view(&self) -> LightboxView {
        self.view
    }

    pub fn image_count(&self, project: usize) -> usize {
        self.image_counts.get(project).copied().unwrap_or(0)
    }

    /// Next view for `action`, or `None` when the action is refused or would
    /// not change anything.
    pub fn transition(&self, action: LightboxAction) -> Option<LightboxView> {
        let next = match (self.view, action) {
            (_, LightboxAction::Select(project)) => {
                if self.image_count(project) == 0 {
                    return None;
                }
                LightboxView::Open { project, image: 0 }
            }
            (LightboxView::Open { .. }, LightboxAction::Close) => LightboxView::Closed,
            (LightboxView::Open { project, image }, LightboxAction::Next) => {
                LightboxView::Open {
                    project,
                    image: self.step(project, image, 1)?,
                }
            }
            (LightboxView::Open { project, image }, LightboxAction::Previous) => {
                LightboxView::Open {
                    project,
                    image: self.step(project, image, -1)?,
                }
            }
            (LightboxView::Closed, _) => return None,
        };

        (next != self.view).then_some(next)
    }

    pub fn with_view(&self, view: LightboxView) -> Self {
        Self {
            image_counts: Rc::clone(&self.image_counts),
            view,
        }
    }

    fn step(&self, project: usize, image: usize, direction: isize) -> Option<usize> {
        let count = self.image_count(project);
        if count <= 1 {
            return None;
        }
        let count = count as isize;
        Some(((image as isize + direction + count) % count) as usize)
    }

    pub fn apply(&self, action: LightboxAction) -> Self {
        match self.transition(action) {
            Some(view) => self.with_view(view),
            None => self.clone(),
        }
    }
}

pub trait ScrollSuspender {
    fn suspend(&self);
    fn restore(&self);
}

pub struct ScrollLockGuard<S: ScrollSuspender> {
    target: S,
}

impl<S: ScrollSuspender> ScrollLockGuard<S> {
    pub fn engage(target: S) -> Self {
        target.suspend();
        Self { target }
    }
}

impl<S: ScrollSuspender> Drop for ScrollLockGuard<S> {
    fn drop(&mut self) {
        self.target.restore();
    }
}
