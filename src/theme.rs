/// Shared look for the shell and the building blocks every page uses.
/// Page specific rules live next to each page.
pub const SITE_CSS: &str = r#"
    :root {
        --primary: #6d4aff;
        --secondary: #14b8a6;
        --accent: #f59e0b;
        --text: #1f2933;
        --muted: #64748b;
        --card: #ffffff;
        --border: rgba(100, 116, 139, 0.2);
        --surface: #f6f7fb;
    }
    * {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        font-family: 'Inter', system-ui, sans-serif;
        color: var(--text);
        background: #fff;
    }
    h1, h2, h3, h4 {
        font-family: 'Poppins', 'Inter', sans-serif;
        margin-top: 0;
    }
    a {
        color: inherit;
        text-decoration: none;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .narrow {
        max-width: 48rem;
        margin: 0 auto;
    }
    .section {
        padding: 5rem 0;
        position: relative;
        overflow: hidden;
    }
    .section.muted {
        background: var(--surface);
    }
    .section-heading {
        text-align: center;
        margin-bottom: 3rem;
    }
    .section-heading h2 {
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .muted-text {
        color: var(--muted);
    }
    .gradient-text {
        background: linear-gradient(135deg, var(--primary), var(--secondary));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .gradient-bg {
        background: linear-gradient(135deg, var(--primary), var(--secondary));
        color: #fff;
    }
    .hero-glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, rgba(109, 74, 255, 0.05), transparent, rgba(20, 184, 166, 0.05));
        pointer-events: none;
    }
    .hero-subtitle {
        font-size: 1.15rem;
        color: var(--muted);
    }
    .btn {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.8rem 2rem;
        border-radius: 0.6rem;
        font-weight: 600;
        border: 1px solid transparent;
        cursor: pointer;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .btn:hover {
        transform: translateY(-2px);
        box-shadow: 0 8px 20px rgba(109, 74, 255, 0.2);
    }
    .btn-primary {
        background: linear-gradient(135deg, var(--primary), var(--secondary));
        color: #fff;
    }
    .btn-outline {
        border-color: var(--border);
        background: transparent;
    }
    .btn-large {
        padding: 1rem 2.5rem;
        font-size: 1.05rem;
    }
    .btn-whatsapp {
        background: #25d366;
        color: #fff;
    }
    .btn-telegram {
        background: #0088cc;
        color: #fff;
    }
    .card {
        background: var(--card);
        border: 1px solid var(--border);
        border-radius: 1rem;
        padding: 1.5rem;
        transition: box-shadow 0.3s ease, border-color 0.3s ease;
    }
    .card:hover {
        box-shadow: 0 12px 30px rgba(31, 41, 51, 0.08);
        border-color: rgba(109, 74, 255, 0.3);
    }
    .icon-badge {
        width: 3rem;
        height: 3rem;
        border-radius: 0.8rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.4rem;
        margin-bottom: 1rem;
    }
    .grid {
        display: grid;
        gap: 1.5rem;
    }
    .grid-2 { grid-template-columns: repeat(2, 1fr); }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .grid-4 { grid-template-columns: repeat(4, 1fr); }

    .top-nav {
        position: sticky;
        top: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(8px);
        transition: box-shadow 0.3s ease, background 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.95);
        box-shadow: 0 2px 12px rgba(31, 41, 51, 0.08);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1.4rem;
    }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .nav-link {
        color: var(--muted);
        font-weight: 500;
    }
    .nav-link:hover, .nav-link.active {
        color: var(--primary);
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: var(--text);
    }

    @media (max-width: 900px) {
        .grid-3, .grid-4 { grid-template-columns: repeat(2, 1fr); }
    }
    @media (max-width: 768px) {
        .grid-2, .grid-3, .grid-4 { grid-template-columns: 1fr; }
        .section { padding: 3.5rem 0; }
        .burger-menu { display: flex; }
        .nav-right {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            padding: 1rem;
            background: #fff;
        }
        .nav-right.mobile-menu-open { display: flex; }
    }
"#;
