//! Built-in division dictionary (Indonesian + English).
//!
//! Divisions: IT, ACC/FINANCE, OPERASIONAL, SALES, CUSTOMER SERVICE, HR,
//! DIREKSI/DIREKTUR and the low-weight General catch-all.

use super::dictionary::{CategoryDictionary, DictionaryError};

/// Name of the catch-all division returned when nothing matches.
pub const FALLBACK_DIVISION: &str = "General";

const IT_KEYWORDS: &[&str] = &[
    // Network & internet
    "internet", "network", "jaringan", "wifi", "wi-fi",
    "koneksi", "connection", "connect", "konek",
    "vpn", "bandwidth", "server", "dns", "ip",
    "lan", "wan", "router", "modem",
    "lemot", "slow", "lambat", "lag",
    // Hardware
    "komputer", "computer", "laptop", "pc", "desktop",
    "hardware", "mouse", "keyboard", "monitor", "layar", "display", "screen",
    "cpu", "ram", "hardisk", "ssd", "printer", "scanner",
    "rusak", "broken", "error", "tidak berfungsi", "mati", "tidak nyala",
    // Software
    "software", "aplikasi", "application", "app", "program",
    "sistem", "system", "windows", "linux", "mac",
    "install", "instalasi", "update", "upgrade", "patch",
    // Failures
    "bug", "crash", "hang", "freeze", "restart",
    "blue screen", "bsod", "not responding", "tidak merespon",
    // Email & access
    "email", "outlook", "gmail", "mail",
    "password", "kata sandi", "login", "akses", "access",
    "account", "akun", "username", "terkunci", "locked",
    "lupa password", "forgot password", "reset password",
    // Database
    "database", "db", "sql", "data", "backup", "restore",
    // Permission
    "permission", "denied", "ditolak", "folder", "file",
];

const FINANCE_KEYWORDS: &[&str] = &[
    // Payment
    "pembayaran", "bayar", "dibayar", "membayar", "payment", "pay", "paid",
    // Bills & invoices
    "tagihan", "bill", "invoice", "faktur",
    // Reimbursement
    "reimbursement", "reimburse", "reimburs", "klaim", "claim",
    // Transfer & money
    "transfer", "dana", "uang", "money", "cash", "tunai",
    // Finance terms
    "keuangan", "finance", "financial", "budget", "anggaran",
    "biaya", "cost", "expense", "pengeluaran",
    "hutang", "debt", "piutang", "receivable",
    "accounting", "akuntansi", "akunting",
    // Transactions
    "transaksi", "transaction", "refund", "pengembalian",
    // Bonus & incentive
    "bonus", "insentif", "incentive", "komisi", "commission",
    // Banking
    "bank", "rekening", "rekonsiliasi", "reconciliation",
    // Reports
    "laporan keuangan", "financial report", "cash flow",
];

const OPERATIONS_KEYWORDS: &[&str] = &[
    // Logistics & shipping
    "pengiriman", "delivery", "kirim", "ship", "shipping",
    "barang", "goods", "cargo", "paket", "package",
    "terlambat", "delay", "late", "telat",
    // Inventory
    "stok", "stock", "inventory", "persediaan",
    "gudang", "warehouse", "storage",
    "habis", "out of stock", "kosong", "empty",
    // Supply chain
    "supply chain", "logistik", "logistics",
    "vendor", "supplier", "pemasok",
    "procurement", "pengadaan",
    // Production
    "produksi", "production", "manufacture",
    "mesin", "machine", "equipment", "peralatan",
    "maintenance", "pemeliharaan", "perbaikan",
    // Quality
    "quality", "kualitas", "quality control", "qc",
    "defect", "cacat", "reject", "retur",
    // Operations
    "operasional", "operational", "operation",
    "proses", "process", "workflow",
    // Facility
    "ruangan", "room", "parkir", "parking",
    "ac", "air conditioner", "lift", "elevator",
];

const SALES_KEYWORDS: &[&str] = &[
    // Sales
    "penjualan", "sales", "sell", "jual",
    "target", "quota", "kuota",
    "deal", "closing", "close",
    // Marketing
    "marketing", "promosi", "promotion", "promo",
    "campaign", "kampanye", "iklan", "advertising",
    "branding", "brand",
    // Customer acquisition
    "lead", "prospek", "prospect",
    "customer", "pelanggan", "klien", "client",
    "order", "pesanan", "purchase",
    // Pricing
    "harga", "price", "pricing",
    "diskon", "discount", "potongan",
    "quotation", "penawaran", "quote",
    // Products
    "produk", "product", "barang",
    "katalog", "catalog",
    // Performance
    "sales report", "laporan penjualan",
    "revenue", "pendapatan", "omzet",
    // Channels
    "distributor", "reseller", "retailer",
];

const CUSTOMER_SERVICE_KEYWORDS: &[&str] = &[
    // Complaints
    "komplain", "complaint", "keluhan", "complain",
    "tidak puas", "dissatisfied", "kecewa",
    // Service desk
    "customer service", "layanan pelanggan", "cs",
    "pelayanan", "service", "dukungan", "support", "claim",
    "klaim",
    // Returns & refunds
    "return", "retur", "pengembalian",
    "refund", "uang kembali",
    "tukar", "exchange", "ganti",
    // Response time
    "respon", "response", "lambat", "slow",
    "tidak ada jawaban", "no response",
    // Customer issues
    "pelanggan marah", "angry customer",
    "customer feedback", "feedback pelanggan",
    "testimoni", "testimonial", "review",
    // After sales
    "after sales", "purna jual",
    "garansi", "warranty", "claim garansi",
    // Handling
    "handle", "menangani", "penanganan",
];

const HR_KEYWORDS: &[&str] = &[
    // Leave & attendance
    "cuti", "leave", "izin", "sakit", "sick",
    "absen", "absensi", "attendance", "hadir", "kehadiran",
    "alpha", "mangkir", "terlambat", "late", "telat",
    "lembur", "overtime", "ot", "shift",
    // Employment
    "kontrak", "contract", "perjanjian kerja",
    "resign", "pengunduran diri", "berhenti", "keluar",
    "recruitment", "rekrutmen", "hiring", "perekrutan",
    "karyawan", "employee", "staff", "pegawai", "pekerja",
    "training", "pelatihan", "workshop", "seminar",
    "onboarding", "orientasi",
    // Career
    "promosi", "promotion", "kenaikan jabatan",
    "mutasi", "rotasi", "rotation",
    "penilaian", "evaluation", "performance", "kinerja",
    "appraisal", "performance review",
    // Benefits
    "tunjangan", "allowance", "benefit",
    "asuransi", "insurance", "bpjs", "jaminan",
    "kesehatan", "health", "medical",
    // Salary & payroll
    "gaji", "salary", "slip gaji", "payslip", "pay slip",
    "upah", "wage", "pembayaran gaji", "salary payment", "payroll",
    "take home pay", "thp", "gaji bersih", "net salary",
    "potongan gaji", "salary deduction", "penggajian",
    // HR admin
    "hr", "human resources", "sdm", "sumber daya manusia",
    // Workplace
    "konflik", "conflict", "masalah karyawan",
];

const DIRECTORS_KEYWORDS: &[&str] = &[
    // Strategy
    "strategi", "strategic", "strategy",
    "planning", "perencanaan", "rencana",
    "bisnis", "business", "development",
    // Executive
    "direksi", "direktur", "director", "executive",
    "board", "dewan", "komisaris",
    "ceo", "cfo", "coo", "cto",
    // Meetings
    "rapat direksi", "board meeting",
    "rapat pimpinan", "management meeting",
    // Decisions
    "keputusan", "decision", "approval",
    "persetujuan", "otorisasi", "authorization",
    // Corporate
    "korporat", "corporate", "perusahaan", "company",
    "merger", "akuisisi", "acquisition",
    "ekspansi", "expansion",
    // Policy
    "kebijakan", "policy", "peraturan",
    "regulasi", "regulation",
    // Reporting
    "laporan ke direksi", "executive report",
    "presentasi direksi", "board presentation",
    // Investment
    "investasi", "investment", "modal", "capital",
];

const GENERAL_KEYWORDS: &[&str] = &[
    "lainnya", "other", "umum", "general",
    "pertanyaan", "question", "tanya",
    "informasi", "information", "info",
    "bantuan", "help", "support",
];

/// Build the default division dictionary.
pub fn default_divisions() -> Result<CategoryDictionary, DictionaryError> {
    CategoryDictionary::builder(FALLBACK_DIVISION)
        .category("IT", 1.0, IT_KEYWORDS.iter().copied())
        .category("ACC/FINANCE", 1.0, FINANCE_KEYWORDS.iter().copied())
        .category("OPERASIONAL", 1.0, OPERATIONS_KEYWORDS.iter().copied())
        .category("SALES", 1.0, SALES_KEYWORDS.iter().copied())
        .category("CUSTOMER SERVICE", 1.0, CUSTOMER_SERVICE_KEYWORDS.iter().copied())
        .category("HR", 1.0, HR_KEYWORDS.iter().copied())
        .category("DIREKSI/DIREKTUR", 1.0, DIRECTORS_KEYWORDS.iter().copied())
        .category(FALLBACK_DIVISION, 0.3, GENERAL_KEYWORDS.iter().copied())
        .build()
}
