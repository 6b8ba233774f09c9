pub const LANDING_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #2c3e50;
    background: #f8f9fb;
}
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 80px;
    background: rgba(255, 255, 255, 0.97);
    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.06);
    z-index: 100;
}
.nav-container {
    max-width: 1200px;
    height: 100%;
    margin: 0 auto;
    padding: 0 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.logo { font-size: 28px; font-weight: 800; color: #2c3e50; text-decoration: none; }
.logo span { color: #3498db; }
.nav-menu { display: flex; align-items: center; gap: 28px; list-style: none; }
.nav-link { color: #2c3e50; text-decoration: none; font-weight: 500; transition: color 0.3s ease; }
.nav-link:hover, .nav-link.active { color: #3498db; }
.mobile-toggle { display: none; background: none; border: none; cursor: pointer; }
.mobile-toggle span {
    display: block;
    width: 25px;
    height: 3px;
    margin: 5px 0;
    background: #2c3e50;
    transition: all 0.3s ease;
}
.primary-btn, .secondary-btn, .outline-btn, .signup-btn {
    padding: 10px 22px;
    border-radius: 6px;
    font-size: 15px;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
    transition: all 0.3s ease;
}
.primary-btn, .signup-btn { background: #3498db; border: 2px solid #3498db; color: #fff; }
.secondary-btn { background: #fff; border: 2px solid #fff; color: #3498db; }
.outline-btn { background: transparent; border: 2px solid #3498db; color: #3498db; }
button:disabled { cursor: default; opacity: 0.85; }
.hero {
    min-height: 100vh;
    padding-top: 80px;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    color: #fff;
    background: linear-gradient(135deg, #3498db 0%, #2c3e50 60%, #1a252f 100%);
    background-size: 100% 200%;
}
.hero-content { max-width: 760px; padding: 0 24px; }
.hero h1 { font-size: 56px; margin-bottom: 20px; }
.hero-subtitle { font-size: 20px; margin-bottom: 36px; opacity: 0.9; }
.hero-cta-group { display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; }
.section-title { text-align: center; font-size: 36px; margin-bottom: 40px; }
.courses, .features, .about { padding: 100px 24px; max-width: 1200px; margin: 0 auto; }
.course-filters { display: flex; gap: 12px; justify-content: center; flex-wrap: wrap; margin-bottom: 40px; }
.filter-btn {
    padding: 8px 20px;
    border-radius: 20px;
    border: 2px solid #3498db;
    background: transparent;
    color: #3498db;
    cursor: pointer;
    transition: all 0.3s ease;
}
.filter-btn.active, .filter-btn:hover { background: #3498db; color: #fff; }
.course-grid, .feature-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 28px; }
.course-card, .feature-card {
    background: #fff;
    border-radius: 12px;
    padding: 28px;
    box-shadow: 0 6px 24px rgba(0, 0, 0, 0.06);
}
.course-header { display: flex; justify-content: space-between; margin-bottom: 14px; font-size: 13px; }
.course-category { color: #3498db; font-weight: 600; }
.course-level { color: #7f8c8d; }
.course-card h3 { margin-bottom: 10px; }
.course-description { color: #7f8c8d; margin-bottom: 16px; }
.course-meta { display: flex; gap: 16px; font-size: 13px; color: #7f8c8d; margin-bottom: 20px; }
.course-footer { display: flex; justify-content: space-between; align-items: center; }
.course-price { font-size: 22px; font-weight: 700; }
.course-actions { display: flex; gap: 8px; }
.feature-icon { font-size: 36px; margin-bottom: 14px; }
.feature-card h3 { margin-bottom: 10px; }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 28px; text-align: center; }
.stat-item h3 { font-size: 44px; color: #3498db; }
.cta {
    margin-top: 80px;
    padding: 60px 24px;
    text-align: center;
    border-radius: 16px;
    color: #fff;
    background: linear-gradient(135deg, #3498db, #2c3e50);
}
.cta p { margin: 16px 0 28px; }
.footer { padding: 32px 24px; text-align: center; background: #2c3e50; color: #bdc3c7; }
@media (max-width: 768px) {
    .mobile-toggle { display: block; }
    .nav-menu {
        position: fixed;
        top: 80px;
        left: -100%;
        width: 100%;
        flex-direction: column;
        padding: 24px 0;
        background: #fff;
        transition: left 0.3s ease;
    }
    .nav-menu.active { left: 0; }
    .hero h1 { font-size: 38px; }
}
"#;
