//! Static response texts for Dispendukcapil Kota Semarang.
//!
//! Texts use Telegram legacy Markdown (`*bold*`, `` `code` ``).

pub const SIDNOK_URL: &str = "https://sidnok.semarangkota.go.id/";

pub const JAM_BUKA: &str = "🕒 *Jam Operasional Dispendukcapil Pusat*\n\
• Senin–Kamis: 08.15–15.00 WIB\n\
• Jumat: 08.00–13.00 WIB\n\
• Sabtu & Minggu: Libur";

pub const ALAMAT: &str = "📍 *Alamat Kantor Pusat*\n\
Jl. Kanguru Raya No.3, Gayamsari, Kec. Gayamsari,\n\
Kota Semarang, Jawa Tengah 50248";

/// Footer appended to most leaf answers.
pub const CATATAN: &str = "ℹ️ *Catatan*: Informasi ini bersifat umum. \
Untuk verifikasi berkas/keputusan akhir, silakan menuju loket Dispendukcapil.";

pub const HOME_TEXT: &str = "👋 *Selamat datang di Asisten Layanan Dispendukcapil Kota Semarang!*\n\n\
Saya siap bantu info layanan berikut:\n\
• KTP (baru, hilang, ubah data, masa berlaku)\n\
• KK (ubah alamat/pekerjaan/status/golongan darah, gabung/pisah, hilang)\n\
• Akta Kelahiran & Akta Kematian\n\
• KIA Anak\n\
• Pindah/Kedatangan Domisili\n\
• Jam & Alamat Kantor\n\
• Layanan Online via *Sidnok*\n\n\
Pilih menu di bawah atau *ketik bebas* pertanyaanmu.";

pub const FAQ_TEXT: &str = "🧭 *Menu Bantuan / FAQ*\n\
Contoh yang bisa diketik:\n\
• `ktp hilang`, `ktp baru`, `ubah data ktp`, `masa berlaku ktp`\n\
• `kk hilang`, `kk ubah alamat`, `kk ubah pekerjaan`, `kk status`, `kk golongan darah`, `gabung kk`, `pisah kk`\n\
• `akta kelahiran`, `akta kelahiran hilang`\n\
• `akta kematian`, `akta kematian hilang`\n\
• `kia`, `pindah domisili`, `pendatang masuk`\n\
• `jam`, `alamat`, `sidnok`";

pub const KIA_TEXT: &str = "🧒 *KIA (Kartu Identitas Anak)*\n\
• Akta Kelahiran\n\
• KK\n\
• KTP orang tua\n\
• Pas foto 3×4 anak";

pub const FALLBACK_TEXT: &str = "❓ *Maaf, saya belum mengenali pertanyaan itu.*\n\
Coba ketik salah satu contoh: `ktp hilang`, `kk ubah alamat`, `akta kelahiran`, `kia`, `pindah domisili`, `sidnok`.\n\
Atau buka *Menu* lewat perintah /menu.";

pub fn about_text() -> String {
    format!(
        "ℹ️ *Tentang Bot*\n\
         Asisten informasi layanan Dispendukcapil Kota Semarang.\n\
         Gunakan menu tombol atau ketik bebas pertanyaan Anda.\n\n\
         {CATATAN}"
    )
}

/// Office hours followed by the office address.
pub fn info_text() -> String {
    format!("{JAM_BUKA}\n\n{ALAMAT}")
}

pub fn sidnok_text() -> String {
    format!("🌐 *Sidnok Online*\nPengajuan KTP/KK/Akta via: {SIDNOK_URL}")
}

pub fn akta_lahir_text() -> String {
    format!(
        "📜 *Akta Kelahiran*\n\
         • Surat keterangan lahir (RS/Bidan)\n\
         • KK & KTP orang tua\n\
         • Buku nikah (jika ada)\n\
         • Bisa melalui kantor Dispendukcapil atau *Sidnok* ({SIDNOK_URL})"
    )
}

pub fn akta_mati_text() -> String {
    "⚰️ *Akta Kematian*\n\
     • Surat keterangan kematian (RS/bidan/kelurahan)\n\
     • KK & KTP almarhum\n\
     • KTP pelapor\n\
     • Ajukan di kantor Dispendukcapil atau kanal resmi yang tersedia"
        .to_string()
}

/// Joins a heading and its bullet lines, then appends the footer.
fn with_note(lines: &[&str]) -> String {
    format!("{}\n\n{CATATAN}", lines.join("\n"))
}

/// Leaf answers with the standard footer, keyed by topic id.
pub fn detail_text(id: &str) -> Option<String> {
    let text = match id {
        "ktp_baru" => {
            let via = format!("• Proses di kantor Dispendukcapil atau via *Sidnok* ({SIDNOK_URL})");
            with_note(&[
                "📄 *KTP Baru*",
                "• Fotokopi KK & Akta Kelahiran",
                "• Usia minimal 17 tahun",
                &via,
            ])
        }
        "ktp_hilang" => with_note(&[
            "🧾 *KTP Hilang*",
            "1️⃣ Lapor kehilangan di kepolisian",
            "2️⃣ Bawa laporan ke Dispendukcapil untuk cetak ulang",
            "3️⃣ Siapkan KK & data diri",
        ]),
        "ktp_ubah" => with_note(&[
            "✏️ *Ubah Data KTP*",
            "• Siapkan dokumen pendukung sesuai perubahan (Akta/KK/Buku Nikah, dsb.)",
            "• Bawa KTP & KK asli",
        ]),
        "ktp_perpanjang" => with_note(&[
            "🔄 *Masa Berlaku KTP*",
            "• e-KTP berlaku *seumur hidup*",
            "• Update diperlukan hanya jika ada *perubahan data*",
        ]),
        "kk_hilang" => with_note(&[
            "🧾 *KK Hilang*",
            "• Lapor kehilangan ke kepolisian",
            "• Bawa laporan ke Dispendukcapil untuk cetak ulang",
        ]),
        "kk_alamat" => with_note(&[
            "🏠 *Ubah Alamat di KK*",
            "• KK & KTP asli",
            "• Surat pindah",
            "• (Jika diminta) bukti kepemilikan/kontrak rumah",
        ]),
        "kk_pekerjaan" => with_note(&[
            "💼 *Ubah Pekerjaan di KK*",
            "• SK/Surat keterangan dari instansi (jika PNS/Guru/dll)",
            "• KTP & KK asli",
        ]),
        "kk_status" => with_note(&[
            "💍 *Ubah Status Perkawinan*",
            "• Buku nikah / akta cerai",
            "• KK & KTP kedua pihak",
        ]),
        "kk_goldar" => with_note(&[
            "🅾️ *Ubah Golongan Darah di KK*",
            "• Surat keterangan golongan darah (PMI/RS/lab)",
            "• KK & KTP asli",
        ]),
        "kk_gabung" => with_note(&[
            "👨‍👩‍👧 *Gabung KK*",
            "• KK asli & pengantar RT/RW",
            "• Proses verifikasi di kantor",
        ]),
        "kk_pisah" => with_note(&[
            "🧍 *Pisah KK*",
            "• KK asli & pengantar RT/RW",
            "• Formulir pemisahan akan dibantu di loket",
        ]),
        "akta_lahir_hilang" => with_note(&[
            "🧾 *Akta Kelahiran Hilang*",
            "• Lapor kehilangan ke kepolisian",
            "• Bawa laporan & dokumen ke Dispendukcapil untuk penerbitan ulang",
        ]),
        "akta_mati_hilang" => with_note(&[
            "🧾 *Akta Kematian Hilang*",
            "• Lapor kehilangan ke kepolisian",
            "• Ajukan ulang di Dispendukcapil",
        ]),
        "pindah_keluar" => with_note(&[
            "🚚 *Perpindahan Keluar*",
            "• KK & KTP",
            "• Surat pengantar RT/RW ➜ terbit *surat pindah*",
        ]),
        "pendatang_masuk" => with_note(&[
            "📦 *Pendatang Masuk (Perpindahan Masuk)*",
            "• Surat pindah dari kota asal",
            "• KK & KTP untuk pembuatan domisili baru",
        ]),
        _ => return None,
    };
    Some(text)
}
