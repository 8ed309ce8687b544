//! Turkish translations.

use super::Table;

pub(super) fn table() -> Table {
    Table::from([
        // Main screen
        ("appTitle", "Kaç Mesai?"),
        ("costInHours", "Saat Cinsinden Maliyet"),
        ("priceInputPlaceholder", "0,00"),
        ("productNamePlaceholder", "Ürün adı (isteğe bağlı)"),
        ("addName", "İsim ekle"),
        ("hideName", "İsmi gizle"),
        ("calculate", "Hesapla"),
        ("newCalculation", "Yeni Hesaplama"),
        ("loading", "Yükleniyor..."),
        // Result
        ("thisPurchaseCosts", "Bu satın alma size mal oluyor:"),
        ("productCosts", "size mal oluyor:"),
        ("hours", "saat"),
        ("days", "gün"),
        ("weeks", "hafta"),
        ("months", "ay"),
        ("hour", "saat"),
        ("day", "gün"),
        ("week", "hafta"),
        ("month", "ay"),
        ("ofWorkTime", "çalışma zamanı"),
        ("price", "Fiyat:"),
        ("hourlyRate", "Saatlik ücret:"),
        ("unnamedProduct", "İsimsiz ürün"),
        // Profile
        ("yourProfile", "Profiliniz"),
        ("edit", "Düzenle"),
        ("incomeDetails", "Gelir Detayları"),
        ("monthlySalary", "Aylık Maaş:"),
        ("currency", "Para Birimi:"),
        ("workHoursPerWeek", "Haftalık Çalışma Saati:"),
        ("hourlyRateTitle", "Saatlik Ücret"),
        ("perHour", "saat başına"),
        (
            "hourlyRateExplanation",
            "Bu, aylık maaşınız ve çalışma saatlerinize dayalı yaklaşık saatlik ücretinizdir. \
             Uygulama bu değeri kullanarak bir satın almanın size kaç çalışma saatine mal \
             olduğunu hesaplar.",
        ),
        ("futureIncome", "Gelecek Gelir"),
        ("futureMonthlySalary", "Gelecek Aylık Maaş:"),
        ("futureHourlyRate", "Gelecek Saatlik Ücret:"),
        // Edit Profile
        ("editProfile", "Profili Düzenle"),
        ("save", "Kaydet"),
        ("monthlySalaryLabel", "Aylık Maaş"),
        ("currencyLabel", "Para Birimi"),
        ("workHoursLabel", "Haftalık Çalışma Saati"),
        ("futureSalaryLabel", "Gelecek Aylık Maaş (İsteğe Bağlı)"),
        // History
        ("history", "Geçmiş"),
        ("noHistoryTitle", "Henüz hesaplama yok"),
        (
            "noHistoryDescription",
            "Uygulamayı kullanmaya başladığınızda hesaplama geçmişiniz burada görünecek.",
        ),
        ("clearHistory", "Geçmişi Temizle"),
        // Onboarding
        ("welcome", "Hoş Geldiniz!"),
        ("setupProfile", "Başlamak için profilinizi ayarlayalım."),
        ("getStarted", "Başlayın"),
        // Tabs
        ("calculator", "Hesaplayıcı"),
        ("historyTab", "Geçmiş"),
        ("profile", "Profil"),
        // Language
        ("language", "Dil"),
        ("selectLanguage", "Dil Seçin"),
        ("selectTimeUnit", "Zaman Birimi Seçin"),
    ])
}
