//! Render models for the kiosk screens.
//!
//! Everything here is plain data built from a session snapshot and the menu. A UI
//! runtime reads the fields to draw widgets; the `Display` impls produce the same
//! screens as text, which is what the demo binary prints.

use crate::divisor::DivisorError;
use crate::model::{Cart, CartRow, MenuCatalog, OrderSession, Screen};
use crate::order_flow::{Notice, OrderFlowError};
use crate::roulette::RouletteError;
use std::fmt;

/// Formats a whole-won amount with thousands separators, e.g. `9,000원`.
#[must_use]
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('원');
    grouped
}

/// One menu item as a card with an "add" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCard {
    pub name: String,
    pub price: u64,
    pub price_label: String,
    pub description: String,
}

/// One category tab of the menu board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTab {
    pub category: String,
    pub cards: Vec<MenuCard>,
}

/// The menu selection panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBoard {
    pub tabs: Vec<MenuTab>,
}

impl MenuBoard {
    pub fn from_catalog(catalog: &MenuCatalog) -> Self {
        let tabs = catalog
            .categories()
            .iter()
            .map(|category| MenuTab {
                category: category.name.clone(),
                cards: category
                    .items
                    .iter()
                    .map(|item| MenuCard {
                        name: item.name.clone(),
                        price: item.unit_price,
                        price_label: format_won(item.unit_price),
                        description: item.description.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { tabs }
    }
}

impl fmt::Display for MenuBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "1. 메뉴 선택하기")?;
        for tab in &self.tabs {
            writeln!(f, "🍔 {}", tab.category)?;
            for card in &tab.cards {
                writeln!(f, "  [담기] {} {} - {}", card.name, card.price_label, card.description)?;
            }
        }
        Ok(())
    }
}

/// A cart line as shown in the editable cart table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTableRow {
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub subtotal: u64,
}

/// The order summary panel: cart lines with subtotals and the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartTable {
    pub rows: Vec<CartTableRow>,
    pub total: u64,
}

impl CartTable {
    pub fn from_cart(cart: &Cart) -> Self {
        let rows = cart
            .lines()
            .iter()
            .map(|line| CartTableRow {
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                subtotal: line.subtotal(),
            })
            .collect();
        Self {
            rows,
            total: cart.total(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The table as edit rows, ready to be changed and sent back as
    /// [`OrderEvent::ReplaceCart`](crate::order_flow::OrderEvent::ReplaceCart).
    pub fn to_snapshot(&self) -> Vec<CartRow> {
        self.rows
            .iter()
            .map(|row| CartRow::new(row.name.clone(), i64::from(row.quantity), row.unit_price))
            .collect()
    }
}

impl fmt::Display for CartTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "2. 주문 내용 확인")?;
        if self.rows.is_empty() {
            writeln!(f, "장바구니가 비어 있습니다. 메뉴를 선택해주세요.")?;
        } else {
            writeln!(f, "메뉴 | 수량 | 단가 (원) | 소계 (원)")?;
            for row in &self.rows {
                writeln!(
                    f,
                    "{} | {} | {} | {}",
                    row.name,
                    row.quantity,
                    format_won(row.unit_price),
                    format_won(row.subtotal)
                )?;
            }
        }
        writeln!(f, "💰 총 주문 금액: {}", format_won(self.total))
    }
}

/// The payment screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentScreen {
    pub total: u64,
    pub methods: Vec<String>,
}

impl PaymentScreen {
    pub fn new(session: &OrderSession, methods: &[String]) -> Self {
        Self {
            total: session.total(),
            methods: methods.to_vec(),
        }
    }

    /// Label of the confirm button for `method`.
    #[must_use]
    pub fn confirm_label(method: &str) -> String {
        format!("✅ {method}으로 결제 완료")
    }
}

impl fmt::Display for PaymentScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "💳 결제하기")?;
        writeln!(f, "최종 결제 금액: {}", format_won(self.total))?;
        writeln!(
            f,
            "⚠️ 주의: 이 페이지는 키오스크 시뮬레이션이며, 실제 결제가 이루어지지 않습니다."
        )?;
        writeln!(f, "결제 수단을 선택해 주세요:")?;
        for (i, method) in self.methods.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, method)?;
        }
        writeln!(f, "⬅️ 메뉴 수정하기")
    }
}

/// Whatever the session's current screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Selecting { menu: MenuBoard, cart: CartTable },
    Paying(PaymentScreen),
}

impl View {
    pub fn render(
        session: &OrderSession,
        catalog: &MenuCatalog,
        payment_methods: &[String],
    ) -> Self {
        match session.screen() {
            Screen::Selecting => View::Selecting {
                menu: MenuBoard::from_catalog(catalog),
                cart: CartTable::from_cart(session.cart()),
            },
            Screen::Paying => View::Paying(PaymentScreen::new(session, payment_methods)),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Selecting { menu, cart } => write!(f, "{menu}\n{cart}"),
            View::Paying(payment) => write!(f, "{payment}"),
        }
    }
}

/// Inline message for the outcome of an event.
#[must_use]
pub fn notice_message(result: &Result<Notice, OrderFlowError>) -> String {
    match result {
        Ok(Notice::Added { name, .. }) => format!("✅ 장바구니에 '{name}' 1개를 추가했습니다!"),
        Ok(Notice::QuantityChanged { name, quantity }) => {
            format!("'{name}' 수량을 {quantity}개로 변경했습니다.")
        }
        Ok(Notice::Removed { name }) => format!("🗑️ '{name}'을(를) 장바구니에서 제거했습니다."),
        Ok(Notice::Unchanged { name }) => format!("'{name}'은(는) 장바구니에 없습니다."),
        Ok(Notice::CartReplaced { lines, total }) => {
            format!("장바구니를 갱신했습니다. ({lines}개 메뉴, {})", format_won(*total))
        }
        Ok(Notice::MovedToPayment { total }) => {
            format!("결제 페이지로 이동합니다. (총 {})", format_won(*total))
        }
        Ok(Notice::BackToMenu) => "메뉴 선택 화면으로 돌아갑니다.".to_string(),
        Ok(Notice::OrderCompleted(receipt)) => format!(
            "🎉 주문이 완료되었습니다! {} / {}",
            receipt.method,
            format_won(receipt.total)
        ),
        Err(OrderFlowError::EmptyCart) => {
            "장바구니가 비어있습니다. 메뉴를 선택해주세요.".to_string()
        }
        Err(OrderFlowError::UnexpectedEvent { .. }) => {
            "지금은 처리할 수 없는 요청입니다.".to_string()
        }
        Err(OrderFlowError::UnknownMenuItem(name)) => format!("'{name}'은(는) 메뉴에 없습니다."),
        Err(OrderFlowError::SessionNotFound(_)) => {
            "주문을 찾을 수 없습니다. 처음부터 다시 시작해 주세요.".to_string()
        }
        Err(OrderFlowError::ActorCommunicationError(_)) => {
            "일시적인 오류가 발생했습니다. 다시 시도해 주세요.".to_string()
        }
    }
}

/// Inline message for a rejected divisor input.
#[must_use]
pub fn divisor_error_message(error: &DivisorError) -> String {
    match error {
        DivisorError::InvalidNumericInput(_) => {
            "숫자 입력이 잘못되었습니다. 정수를 입력해 주세요.".to_string()
        }
    }
}

/// Inline message for a roulette that cannot be built.
#[must_use]
pub fn roulette_error_message(error: &RouletteError) -> String {
    match error {
        RouletteError::EmptySelection => "후보를 한 개 이상 입력해 주세요.".to_string(),
    }
}
