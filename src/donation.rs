/// `qr_visible` is never `true` while the panel is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DonationPanel {
    open: bool,
    qr_visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DonationAction {
    Toggle,
    ToggleQr,
    PointerDown { inside_widget: bool },
}

impl DonationPanel {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn qr_visible(self) -> bool {
        self.qr_visible
    }

    pub fn apply(self, action: DonationAction) -> Self {
        match action {
            DonationAction::Toggle if self.open => Self::default(),
            DonationAction::Toggle => Self {
                open: true,
                qr_visible: false,
            },
            DonationAction::ToggleQr if self.open => Self {
                open: true,
                qr_visible: !self.qr_visible,
            },
            DonationAction::ToggleQr => self,
            DonationAction::PointerDown { inside_widget } => {
                if inside_widget || !self.open {
                    self
                } else {
                    Self::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with_qr() -> DonationPanel {
        DonationPanel::default()
            .apply(DonationAction::Toggle)
            .apply(DonationAction::ToggleQr)
    }

    #[test]
    fn outside_pointer_closes_panel_and_hides_qr() {
        let panel = open_with_qr();
        assert!(panel.is_open() && panel.qr_visible());

        let panel = panel.apply(DonationAction::PointerDown { inside_widget: false });
        assert!(!panel.is_open());
        assert!(!panel.qr_visible());
    }

    #[test]
    fn inside_pointer_keeps_panel_open() {
        let panel = open_with_qr().apply(DonationAction::PointerDown { inside_widget: true });
        assert_eq!(panel, open_with_qr());
    }

    #[test]
    fn outside_pointer_while_closed_is_a_no_op() {
        let panel = DonationPanel::default();
        assert_eq!(
            panel.apply(DonationAction::PointerDown { inside_widget: false }),
            panel
        );
    }

    #[test]
    fn closing_by_toggle_resets_qr() {
        let panel = open_with_qr().apply(DonationAction::Toggle);
        assert_eq!(panel, DonationPanel::default());

        let reopened = panel.apply(DonationAction::Toggle);
        assert!(reopened.is_open());
        assert!(!reopened.qr_visible());
    }

    #[test]
    fn qr_cannot_be_shown_while_closed() {
        let panel = DonationPanel::default().apply(DonationAction::ToggleQr);
        assert!(!panel.qr_visible());
    }
}
